// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::Editor};

/// Verifies bearer tokens presented by content editors.
pub trait EditorAuthenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> ApplicationResult<Editor>;
}
