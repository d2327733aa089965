// src/domain/document/entity.rs
use crate::domain::document::value_objects::{
    Collection, DocumentId, DocumentMeta, DocumentSlug, DocumentTitle,
};
use crate::domain::locale::{Locale, Localized};
use chrono::{DateTime, Utc};

/// Slug of the page served at the site root.
pub const HOME_SLUG: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedContent {
    pub title: DocumentTitle,
    pub meta: DocumentMeta,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub collection: Collection,
    pub slug: DocumentSlug,
    pub content: Localized<LocalizedContent>,
    pub categories: Vec<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.published_at = None;
        self.updated_at = now;
    }

    pub fn url(&self) -> String {
        document_url(self.collection, self.slug.as_str())
    }
}

/// Public path of a document.
pub fn document_url(collection: Collection, slug: &str) -> String {
    match collection {
        Collection::Pages if slug == HOME_SLUG => "/".to_string(),
        Collection::Pages => format!("/{slug}"),
        other => format!("/{other}/{slug}"),
    }
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub collection: Collection,
    pub slug: DocumentSlug,
    pub locale: Locale,
    pub content: LocalizedContent,
    pub categories: Vec<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update. Localized content is written for a single locale.
#[derive(Debug, Clone)]
pub struct DocumentUpdate {
    pub id: DocumentId,
    pub slug: Option<DocumentSlug>,
    pub content: Option<(Locale, LocalizedContent)>,
    pub categories: Option<Vec<String>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentUpdate {
    pub fn new(id: DocumentId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: None,
            content: None,
            categories: None,
            publish_state: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_slug(mut self, slug: DocumentSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, locale: Locale, content: LocalizedContent) -> Self {
        self.content = Some((locale, content));
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_publish_state(
        mut self,
        published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            published,
            published_at,
        });
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.content.is_none()
            && self.categories.is_none()
            && self.publish_state.is_none()
    }
}
