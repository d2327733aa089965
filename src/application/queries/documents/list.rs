use super::DocumentQueryService;
use crate::{
    application::{
        dto::{DocumentDto, Editor},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{document::Collection, locale::Locale},
};

pub const MAX_LIST_LIMIT: u32 = 100;

pub struct ListDocumentsQuery {
    pub collection: Collection,
    pub locale: Locale,
    pub include_drafts: bool,
    pub limit: u32,
}

impl DocumentQueryService {
    pub async fn list_documents(
        &self,
        editor: Option<&Editor>,
        query: ListDocumentsQuery,
    ) -> ApplicationResult<Vec<DocumentDto>> {
        if query.include_drafts && editor.is_none() {
            return Err(ApplicationError::unauthorized(
                "drafts are only visible to editors",
            ));
        }
        let limit = query.limit.clamp(1, MAX_LIST_LIMIT);

        let documents = self
            .read_repo
            .list(query.collection, query.include_drafts, limit)
            .await?;

        Ok(documents
            .into_iter()
            .map(|doc| DocumentDto::render(doc, query.locale, &self.localization))
            .collect())
    }
}
