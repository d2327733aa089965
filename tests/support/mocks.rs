// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use hromada_cms::application::ports::time::Clock;
use hromada_cms::domain::document::{
    Collection, Document, DocumentId, DocumentReadRepository, DocumentSlug, DocumentUpdate,
    DocumentWriteRepository, NewDocument, SearchCriteria,
};
use hromada_cms::domain::errors::{DomainError, DomainResult};
use hromada_cms::domain::locale::{Locale, Localization, Localized};
use hromada_cms::domain::navigation::{Menu, NavItem, NavigationRepository};
use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
}

/// Advances one second on every call so successive writes get distinct timestamps.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

/// Document store backing both repository traits, mirroring the Postgres
/// constraints: unique `(collection, slug)` and optimistic `updated_at` checks.
pub struct InMemoryDocuments {
    docs: Mutex<Vec<Document>>,
    next_id: AtomicI64,
    localization: Localization,
}

impl InMemoryDocuments {
    pub fn new(localization: Localization) -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            localization,
        }
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    fn slug_taken(docs: &[Document], collection: Collection, slug: &DocumentSlug, except: Option<DocumentId>) -> bool {
        docs.iter().any(|doc| {
            doc.collection == collection && &doc.slug == slug && Some(doc.id) != except
        })
    }
}

impl Default for InMemoryDocuments {
    fn default() -> Self {
        Self::new(Localization::default())
    }
}

#[async_trait]
impl DocumentWriteRepository for InMemoryDocuments {
    async fn insert(&self, new: NewDocument) -> DomainResult<Document> {
        let mut docs = self.docs.lock().unwrap();
        if Self::slug_taken(&docs, new.collection, &new.slug, None) {
            return Err(DomainError::Conflict(format!(
                "slug '{}' already exists",
                new.slug
            )));
        }
        let id = DocumentId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let document = Document {
            id,
            collection: new.collection,
            slug: new.slug,
            content: Localized::single(new.locale, new.content),
            categories: new.categories,
            published: new.published,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        docs.push(document.clone());
        Ok(document)
    }

    async fn update(&self, update: DocumentUpdate) -> DomainResult<Document> {
        let mut docs = self.docs.lock().unwrap();
        if let Some(slug) = update.slug.as_ref() {
            let collection = docs
                .iter()
                .find(|doc| doc.id == update.id)
                .map(|doc| doc.collection);
            if let Some(collection) = collection {
                if Self::slug_taken(&docs, collection, slug, Some(update.id)) {
                    return Err(DomainError::Conflict(format!("slug '{slug}' already exists")));
                }
            }
        }
        let doc = docs
            .iter_mut()
            .find(|doc| doc.id == update.id)
            .ok_or_else(|| DomainError::NotFound("document not found".into()))?;
        if doc.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "document was modified concurrently".into(),
            ));
        }
        if let Some(slug) = update.slug {
            doc.slug = slug;
        }
        if let Some((locale, content)) = update.content {
            doc.content.set(locale, content);
        }
        if let Some(categories) = update.categories {
            doc.categories = categories;
        }
        if let Some(state) = update.publish_state {
            doc.published = state.published;
            doc.published_at = state.published_at;
        }
        doc.updated_at = update.updated_at;
        Ok(doc.clone())
    }

    async fn delete(&self, id: DocumentId) -> DomainResult<()> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        if docs.len() == before {
            return Err(DomainError::NotFound("document not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentReadRepository for InMemoryDocuments {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs.iter().find(|doc| doc.id == id).cloned())
    }

    async fn find_by_slug(
        &self,
        collection: Collection,
        slug: &DocumentSlug,
    ) -> DomainResult<Option<Document>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .find(|doc| doc.collection == collection && &doc.slug == slug)
            .cloned())
    }

    async fn list(
        &self,
        collection: Collection,
        include_drafts: bool,
        limit: u32,
    ) -> DomainResult<Vec<Document>> {
        let docs = self.docs.lock().unwrap();
        let mut out: Vec<Document> = docs
            .iter()
            .filter(|doc| doc.collection == collection && (include_drafts || doc.published))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        out.truncate(limit as usize);
        Ok(out)
    }

    async fn search(&self, criteria: &SearchCriteria) -> DomainResult<(Vec<Document>, u64)> {
        let docs = self.docs.lock().unwrap();
        let mut matched: Vec<Document> = docs
            .iter()
            .filter(|doc| criteria.matches(doc, &self.localization))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        let total = matched.len() as u64;
        matched.truncate(criteria.limit as usize);
        Ok((matched, total))
    }
}

#[derive(Default)]
pub struct InMemoryNavigation {
    menus: Mutex<HashMap<(Menu, Locale), Vec<NavItem>>>,
}

#[async_trait]
impl NavigationRepository for InMemoryNavigation {
    async fn items(&self, menu: Menu, locale: Locale) -> DomainResult<Vec<NavItem>> {
        let menus = self.menus.lock().unwrap();
        Ok(menus.get(&(menu, locale)).cloned().unwrap_or_default())
    }

    async fn replace(&self, menu: Menu, locale: Locale, items: Vec<NavItem>) -> DomainResult<()> {
        self.menus.lock().unwrap().insert((menu, locale), items);
        Ok(())
    }
}
