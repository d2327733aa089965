// src/application/commands/documents/mod.rs
mod delete;
mod publish;
mod save;
mod service;

pub use delete::DeleteDocumentCommand;
pub use publish::SetPublishStateCommand;
pub use save::SaveDocumentCommand;
pub use service::DocumentCommandService;
