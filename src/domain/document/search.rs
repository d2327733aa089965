// src/domain/document/search.rs
use crate::domain::document::entity::{Document, LocalizedContent};
use crate::domain::document::value_objects::Collection;
use crate::domain::locale::{Locale, Localization};

pub const DEFAULT_SEARCH_LIMIT: u32 = 12;
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// Published-document search. A term matches a document when any searchable
/// field "likes" it: every whitespace separated word of the term occurs in
/// the field, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub term: Option<String>,
    pub locale: Locale,
    pub collection: Option<Collection>,
    pub limit: u32,
}

impl SearchCriteria {
    pub fn new(term: Option<String>, locale: Locale) -> Self {
        let term = term
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self {
            term,
            locale,
            collection: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_collection(mut self, collection: Option<Collection>) -> Self {
        self.collection = collection;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        self
    }

    /// Lowercased words of the term. Empty when there is no term.
    pub fn words(&self) -> Vec<String> {
        self.term
            .as_deref()
            .map(|t| t.split_whitespace().map(str::to_lowercase).collect())
            .unwrap_or_default()
    }

    /// In-process evaluation of the criteria, used by non-SQL stores.
    pub fn matches(&self, document: &Document, localization: &Localization) -> bool {
        if !document.published {
            return false;
        }
        if self.collection.is_some_and(|c| c != document.collection) {
            return false;
        }

        let words = self.words();
        if words.is_empty() {
            return true;
        }

        let content = document
            .content
            .get(self.locale, localization)
            .map(|(_, content)| content);
        searchable_fields(content, document.slug.as_str())
            .into_iter()
            .any(|field| field_likes(field, &words))
    }
}

fn searchable_fields<'a>(content: Option<&'a LocalizedContent>, slug: &'a str) -> Vec<&'a str> {
    let mut fields = Vec::with_capacity(4);
    if let Some(content) = content {
        fields.push(content.title.as_str());
        if let Some(title) = content.meta.title.as_deref() {
            fields.push(title);
        }
        if let Some(description) = content.meta.description.as_deref() {
            fields.push(description);
        }
    }
    fields.push(slug);
    fields
}

fn field_likes(field: &str, words: &[String]) -> bool {
    let haystack = field.to_lowercase();
    words.iter().all(|word| haystack.contains(word.as_str()))
}

/// Escapes `%`, `_` and `\` for use inside an SQL `LIKE` pattern.
pub fn escape_like(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
