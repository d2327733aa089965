// src/domain/document/repository.rs
use crate::domain::document::entity::{Document, DocumentUpdate, NewDocument};
use crate::domain::document::search::SearchCriteria;
use crate::domain::document::value_objects::{Collection, DocumentId, DocumentSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentWriteRepository: Send + Sync {
    async fn insert(&self, document: NewDocument) -> DomainResult<Document>;
    async fn update(&self, update: DocumentUpdate) -> DomainResult<Document>;
    async fn delete(&self, id: DocumentId) -> DomainResult<()>;
}

#[async_trait]
pub trait DocumentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>>;
    async fn find_by_slug(
        &self,
        collection: Collection,
        slug: &DocumentSlug,
    ) -> DomainResult<Option<Document>>;
    async fn list(
        &self,
        collection: Collection,
        include_drafts: bool,
        limit: u32,
    ) -> DomainResult<Vec<Document>>;
    /// Matching documents (newest first, at most `criteria.limit`) and the
    /// total number of matches.
    async fn search(&self, criteria: &SearchCriteria) -> DomainResult<(Vec<Document>, u64)>;
}
