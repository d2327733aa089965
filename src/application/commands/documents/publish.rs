// src/application/commands/documents/publish.rs
use super::DocumentCommandService;
use crate::{
    application::{dto::DocumentDto, error::ApplicationResult},
    domain::{
        document::{Collection, DocumentId, DocumentUpdate},
        locale::Locale,
    },
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub collection: Collection,
    pub locale: Locale,
    pub publish: bool,
}

impl DocumentCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<DocumentDto> {
        self.ensure_locale(command.locale)?;
        let id = DocumentId::new(command.id)?;
        let mut document = self.load(id, command.collection).await?;

        if document.published == command.publish {
            return Ok(DocumentDto::render(document, command.locale, &self.localization));
        }

        let original_updated_at = document.updated_at;
        let now = self.clock.now();
        if command.publish {
            document.publish(now);
        } else {
            document.unpublish(now);
        }

        let mut update = DocumentUpdate::new(id, original_updated_at)
            .with_publish_state(document.published, document.published_at);
        update.set_updated_at(now);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            document_id = command.id,
            published = updated.published,
            "document publish state changed"
        );
        Ok(DocumentDto::render(updated, command.locale, &self.localization))
    }
}
