// src/infrastructure/security/editor_token.rs
use crate::application::{
    dto::Editor,
    error::{ApplicationError, ApplicationResult},
    ports::security::EditorAuthenticator,
};

pub const MIN_TOKEN_LEN: usize = 32;

/// Accepts a single shared editor token configured at startup.
///
/// Only the BLAKE3 digest of the token is retained; `blake3::Hash` equality
/// runs in constant time.
#[derive(Clone)]
pub struct StaticTokenAuthenticator {
    digest: blake3::Hash,
    editor_name: String,
}

impl StaticTokenAuthenticator {
    pub fn new(token: &str) -> ApplicationResult<Self> {
        if token.trim().len() < MIN_TOKEN_LEN {
            return Err(ApplicationError::validation(format!(
                "editor token must be at least {MIN_TOKEN_LEN} characters"
            )));
        }
        Ok(Self {
            digest: blake3::hash(token.trim().as_bytes()),
            editor_name: "editor".into(),
        })
    }

    pub fn with_editor_name(mut self, name: impl Into<String>) -> Self {
        self.editor_name = name.into();
        self
    }
}

impl EditorAuthenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> ApplicationResult<Editor> {
        let presented = blake3::hash(token.trim().as_bytes());
        if presented == self.digest {
            Ok(Editor {
                name: self.editor_name.clone(),
            })
        } else {
            Err(ApplicationError::unauthorized("invalid editor token"))
        }
    }
}
