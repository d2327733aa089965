use crate::domain::document::Document;
use crate::domain::locale::{Locale, Localization};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::documents::MetaDto;

/// The subset of a document shown on the search page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub collection: String,
    pub title: Option<String>,
    pub slug: String,
    pub url: String,
    pub categories: Vec<String>,
    pub meta: MetaDto,
}

impl SearchResultDto {
    pub fn render(document: Document, locale: Locale, localization: &Localization) -> Self {
        let url = document.url();
        let (title, meta) = match document.content.get(locale, localization) {
            Some((_, content)) => (
                Some(content.title.as_str().to_string()),
                content.meta.clone().into(),
            ),
            None => (None, MetaDto::default()),
        };
        Self {
            collection: document.collection.as_str().to_string(),
            title,
            slug: document.slug.into_inner(),
            url,
            categories: document.categories,
            meta,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchPageDto {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub total_docs: u64,
    pub docs: Vec<SearchResultDto>,
}
