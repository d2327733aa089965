use crate::domain::document::{Document, DocumentMeta};
use crate::domain::locale::{Locale, Localization};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetaDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<DocumentMeta> for MetaDto {
    fn from(meta: DocumentMeta) -> Self {
        Self {
            title: meta.title,
            description: meta.description,
        }
    }
}

impl From<MetaDto> for DocumentMeta {
    fn from(meta: MetaDto) -> Self {
        DocumentMeta {
            title: meta.title,
            description: meta.description,
        }
        .normalized()
    }
}

/// A document rendered for one locale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentDto {
    pub id: i64,
    pub collection: String,
    pub slug: String,
    pub url: String,
    /// Locale the localized fields were served in; differs from the requested
    /// locale when fallback content was used.
    pub locale: String,
    pub title: Option<String>,
    pub meta: MetaDto,
    pub body: Option<String>,
    pub categories: Vec<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentDto {
    pub fn render(document: Document, locale: Locale, localization: &Localization) -> Self {
        let url = document.url();
        let (served, content) = match document.content.get(locale, localization) {
            Some((served, content)) => (served, Some(content.clone())),
            None => (locale, None),
        };
        let (title, meta, body) = match content {
            Some(content) => (
                Some(content.title.into_inner()),
                content.meta.into(),
                content.body,
            ),
            None => (None, MetaDto::default(), None),
        };

        Self {
            id: document.id.into(),
            collection: document.collection.as_str().to_string(),
            slug: document.slug.into_inner(),
            url,
            locale: served.code().to_string(),
            title,
            meta,
            body,
            categories: document.categories,
            published: document.published,
            published_at: document.published_at,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}
