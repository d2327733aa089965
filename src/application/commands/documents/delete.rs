// src/application/commands/documents/delete.rs
use super::DocumentCommandService;
use crate::{application::error::ApplicationResult, domain::document::Collection};

pub struct DeleteDocumentCommand {
    pub id: i64,
    pub collection: Collection,
}

impl DocumentCommandService {
    pub async fn delete_document(&self, command: DeleteDocumentCommand) -> ApplicationResult<()> {
        let id = crate::domain::document::DocumentId::new(command.id)?;
        let document = self.load(id, command.collection).await?;
        self.write_repo.delete(id).await?;
        tracing::info!(document_id = command.id, slug = %document.slug, "document deleted");
        Ok(())
    }
}
