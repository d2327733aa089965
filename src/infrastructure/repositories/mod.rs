// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_document;
mod postgres_navigation;

pub use error::map_sqlx;
pub use postgres_document::{PostgresDocumentReadRepository, PostgresDocumentWriteRepository};
pub use postgres_navigation::PostgresNavigationRepository;
