// src/infrastructure/security/mod.rs
pub mod editor_token;

pub use editor_token::StaticTokenAuthenticator;
