// src/presentation/http/middleware/mod.rs
pub mod rate_limit;

pub use rate_limit::search_rate_limit_layer;
