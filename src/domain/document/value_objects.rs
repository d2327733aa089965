// src/domain/document/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::is_slug_char;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const MAX_SLUG_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub i64);

impl DocumentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("document id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<DocumentId> for i64 {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Pages,
    Posts,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Pages => "pages",
            Collection::Posts => "posts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pages" => Ok(Collection::Pages),
            "posts" => Ok(Collection::Posts),
            other => Err(DomainError::NotFound(format!(
                "unknown collection '{other}'"
            ))),
        }
    }
}

/// A stored slug: non-empty, at most 200 characters of `[a-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentSlug(String);

impl DocumentSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| is_slug_char(c) && !c.is_ascii_uppercase())
        {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits, '_' and '-'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DocumentSlug> for String {
    fn from(value: DocumentSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTitle(String);

impl DocumentTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// SEO metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl DocumentMeta {
    /// Blank strings are stored as absent.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }
        Self {
            title: clean(self.title),
            description: clean(self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_formatted_output() {
        assert!(DocumentSlug::new("pro-nas").is_ok());
        assert!(DocumentSlug::new("zvit_2024-q1").is_ok());
    }

    #[test]
    fn slug_rejects_invalid_values() {
        assert!(DocumentSlug::new("").is_err());
        assert!(DocumentSlug::new("Pro-Nas").is_err());
        assert!(DocumentSlug::new("про-нас").is_err());
        assert!(DocumentSlug::new("a b").is_err());
        assert!(DocumentSlug::new("a".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[test]
    fn collection_round_trips_through_str() {
        for collection in [Collection::Pages, Collection::Posts] {
            assert_eq!(collection.as_str().parse::<Collection>().unwrap(), collection);
        }
        assert!("media".parse::<Collection>().is_err());
    }

    #[test]
    fn meta_drops_blank_values() {
        let meta = DocumentMeta {
            title: Some("  ".into()),
            description: Some("Опис".into()),
        }
        .normalized();
        assert_eq!(meta.title, None);
        assert_eq!(meta.description.as_deref(), Some("Опис"));
    }
}
