pub mod entity;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use entity::{
    Document, DocumentUpdate, HOME_SLUG, LocalizedContent, NewDocument, document_url,
};
pub use repository::{DocumentReadRepository, DocumentWriteRepository};
pub use search::SearchCriteria;
pub use value_objects::{Collection, DocumentId, DocumentMeta, DocumentSlug, DocumentTitle};
