use super::DocumentQueryService;
use crate::{
    application::{
        dto::{SearchPageDto, SearchResultDto},
        error::ApplicationResult,
    },
    domain::{
        document::{Collection, SearchCriteria},
        locale::Locale,
    },
};

pub struct SearchDocumentsQuery {
    pub q: Option<String>,
    pub locale: Locale,
    pub collection: Option<Collection>,
    pub limit: Option<u32>,
}

impl DocumentQueryService {
    pub async fn search_documents(&self, query: SearchDocumentsQuery) -> ApplicationResult<SearchPageDto> {
        let criteria = SearchCriteria::new(query.q, query.locale)
            .with_collection(query.collection)
            .with_limit(query.limit.unwrap_or(self.search_limit));

        let (documents, total_docs) = self.read_repo.search(&criteria).await?;
        tracing::debug!(
            term = criteria.term.as_deref().unwrap_or(""),
            locale = %criteria.locale,
            total_docs,
            "search executed"
        );

        let docs = documents
            .into_iter()
            .map(|doc| SearchResultDto::render(doc, criteria.locale, &self.localization))
            .collect();

        Ok(SearchPageDto {
            locale: criteria.locale.code().to_string(),
            query: criteria.term,
            total_docs,
            docs,
        })
    }
}
