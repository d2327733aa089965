use super::DocumentQueryService;
use crate::{
    application::{
        dto::{DocumentDto, Editor},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        document::{Collection, DocumentSlug},
        locale::Locale,
    },
};

pub struct GetDocumentBySlugQuery {
    pub collection: Collection,
    pub slug: String,
    pub locale: Locale,
}

impl DocumentQueryService {
    /// Drafts are only returned to editors.
    pub async fn get_document_by_slug(
        &self,
        editor: Option<&Editor>,
        query: GetDocumentBySlugQuery,
    ) -> ApplicationResult<DocumentDto> {
        let slug = DocumentSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("document not found"))?;
        let document = self
            .read_repo
            .find_by_slug(query.collection, &slug)
            .await?
            .filter(|doc| doc.published || editor.is_some())
            .ok_or_else(|| ApplicationError::not_found("document not found"))?;

        Ok(DocumentDto::render(document, query.locale, &self.localization))
    }
}
