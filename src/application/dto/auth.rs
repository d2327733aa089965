use serde::Serialize;

/// An authenticated content editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Editor {
    pub name: String,
}
