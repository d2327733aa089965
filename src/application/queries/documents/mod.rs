mod get_by_slug;
mod list;
mod search;
mod service;

pub use get_by_slug::GetDocumentBySlugQuery;
pub use list::{ListDocumentsQuery, MAX_LIST_LIMIT};
pub use search::SearchDocumentsQuery;
pub use service::DocumentQueryService;
