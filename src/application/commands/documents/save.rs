// src/application/commands/documents/save.rs
use super::DocumentCommandService;
use crate::{
    application::{
        dto::{DocumentDto, MetaDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        document::{
            Collection, Document, DocumentId, DocumentSlug, DocumentTitle, DocumentUpdate,
            LocalizedContent, NewDocument, value_objects::MAX_SLUG_LEN,
        },
        locale::Locale,
        slug::{FieldOperation, SLUG_FIELD, SlugHookArgs, truncate_slug},
    },
};
use serde_json::{Map, Value};

/// Create (`id == None`) or update a document in one locale.
#[derive(Debug, Clone)]
pub struct SaveDocumentCommand {
    pub id: Option<i64>,
    pub collection: Collection,
    pub locale: Locale,
    pub title: Option<String>,
    /// Raw slug value as submitted. Any JSON type is accepted here; the slug
    /// hook decides what to do with it.
    pub slug: Option<Value>,
    pub meta: Option<MetaDto>,
    pub body: Option<String>,
    pub categories: Option<Vec<String>>,
    pub publish: Option<bool>,
}

impl SaveDocumentCommand {
    pub fn create(collection: Collection, locale: Locale, title: impl Into<String>) -> Self {
        Self {
            id: None,
            collection,
            locale,
            title: Some(title.into()),
            slug: None,
            meta: None,
            body: None,
            categories: None,
            publish: None,
        }
    }

    pub fn update(id: i64, collection: Collection, locale: Locale) -> Self {
        Self {
            id: Some(id),
            collection,
            locale,
            title: None,
            slug: None,
            meta: None,
            body: None,
            categories: None,
            publish: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<Value>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_meta(mut self, meta: MetaDto) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_publish(mut self, publish: bool) -> Self {
        self.publish = Some(publish);
        self
    }
}

/// What the slug hook decided for this save.
enum SlugDecision {
    Set(DocumentSlug),
    Keep,
}

impl DocumentCommandService {
    pub async fn save_document(&self, command: SaveDocumentCommand) -> ApplicationResult<DocumentDto> {
        self.ensure_locale(command.locale)?;
        match command.id {
            None => self.create_document(command).await,
            Some(id) => self.update_document(DocumentId::new(id)?, command).await,
        }
    }

    async fn create_document(&self, command: SaveDocumentCommand) -> ApplicationResult<DocumentDto> {
        let title_raw = command
            .title
            .clone()
            .ok_or_else(|| ApplicationError::validation("title is required"))?;
        let title = DocumentTitle::new(title_raw.clone())?;

        let mut data = Map::new();
        data.insert(self.slug_field.fallback().to_string(), Value::String(title_raw));
        let slug = match self.run_slug_hook(FieldOperation::Create, command.slug.as_ref(), &data)? {
            SlugDecision::Set(slug) => slug,
            SlugDecision::Keep => {
                return Err(ApplicationError::validation(
                    "slug could not be derived; provide a slug or a title with latin or cyrillic letters",
                ));
            }
        };

        let now = self.clock.now();
        let publish = command.publish.unwrap_or(false);
        let new_document = NewDocument {
            collection: command.collection,
            slug,
            locale: command.locale,
            content: LocalizedContent {
                title,
                meta: command.meta.map(Into::into).unwrap_or_default(),
                body: command.body.filter(|b| !b.trim().is_empty()),
            },
            categories: normalize_categories(command.categories.unwrap_or_default()),
            published: publish,
            published_at: publish.then_some(now),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_document).await?;
        tracing::info!(
            document_id = i64::from(created.id),
            collection = %created.collection,
            slug = %created.slug,
            locale = %command.locale,
            "document created"
        );
        Ok(DocumentDto::render(created, command.locale, &self.localization))
    }

    async fn update_document(
        &self,
        id: DocumentId,
        command: SaveDocumentCommand,
    ) -> ApplicationResult<DocumentDto> {
        let mut document = self.load(id, command.collection).await?;
        let locale = command.locale;
        let stored_content = document.content.exact(locale).cloned();

        let title = match command.title.clone() {
            Some(raw) => Some(DocumentTitle::new(raw)?),
            None => None,
        };

        let mut data = Map::new();
        let current_title = title
            .as_ref()
            .or(stored_content.as_ref().map(|c| &c.title))
            .map(|t| t.as_str().to_string());
        if let Some(current_title) = current_title {
            data.insert(self.slug_field.fallback().to_string(), Value::String(current_title));
        }
        data.insert(
            SLUG_FIELD.to_string(),
            Value::String(document.slug.as_str().to_string()),
        );

        let now = self.clock.now();
        let mut update = DocumentUpdate::new(id, document.updated_at);

        if let SlugDecision::Set(slug) =
            self.run_slug_hook(FieldOperation::Update, command.slug.as_ref(), &data)?
        {
            if slug != document.slug {
                update = update.with_slug(slug);
            }
        }

        if title.is_some() || command.meta.is_some() || command.body.is_some() {
            let content = merge_content(locale, stored_content, title, command.meta, command.body)?;
            update = update.with_content(locale, content);
        }

        if let Some(categories) = command.categories {
            update = update.with_categories(normalize_categories(categories));
        }

        if let Some(publish) = command.publish {
            if publish != document.published {
                if publish {
                    document.publish(now);
                } else {
                    document.unpublish(now);
                }
                update = update.with_publish_state(document.published, document.published_at);
            }
        }

        if update.is_empty() {
            return Ok(DocumentDto::render(document, locale, &self.localization));
        }

        update.set_updated_at(now);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            document_id = i64::from(updated.id),
            slug = %updated.slug,
            locale = %locale,
            "document updated"
        );
        Ok(DocumentDto::render(updated, locale, &self.localization))
    }

    fn run_slug_hook(
        &self,
        operation: FieldOperation,
        value: Option<&Value>,
        data: &Map<String, Value>,
    ) -> ApplicationResult<SlugDecision> {
        let outcome = self.slug_field.apply(SlugHookArgs {
            value,
            operation,
            data,
        });
        let explicit = value
            .and_then(Value::as_str)
            .is_some_and(|slug| !slug.is_empty());
        match outcome {
            Some(Value::String(slug)) if !slug.is_empty() => {
                // Derived slugs are shortened; explicit ones must fit as given.
                let slug = if explicit {
                    slug
                } else {
                    truncate_slug(&slug, MAX_SLUG_LEN).to_string()
                };
                Ok(SlugDecision::Set(DocumentSlug::new(slug)?))
            }
            None | Some(Value::Null) | Some(Value::String(_)) => Ok(SlugDecision::Keep),
            Some(_) => Err(ApplicationError::validation("slug must be a string")),
        }
    }

    pub(super) async fn load(
        &self,
        id: DocumentId,
        collection: Collection,
    ) -> ApplicationResult<Document> {
        self.read_repo
            .find_by_id(id)
            .await?
            .filter(|doc| doc.collection == collection)
            .ok_or_else(|| ApplicationError::not_found("document not found"))
    }

    pub(super) fn ensure_locale(&self, locale: Locale) -> ApplicationResult<()> {
        if self.localization.supports(locale) {
            Ok(())
        } else {
            Err(ApplicationError::not_found(format!(
                "locale '{locale}' is not enabled"
            )))
        }
    }
}

fn merge_content(
    locale: Locale,
    stored: Option<LocalizedContent>,
    title: Option<DocumentTitle>,
    meta: Option<MetaDto>,
    body: Option<String>,
) -> ApplicationResult<LocalizedContent> {
    let title = match (title, stored.as_ref()) {
        (Some(title), _) => title,
        (None, Some(stored)) => stored.title.clone(),
        (None, None) => {
            return Err(ApplicationError::validation(format!(
                "title is required for the first '{locale}' translation"
            )));
        }
    };
    let meta = match (meta, stored.as_ref()) {
        (Some(meta), _) => meta.into(),
        (None, Some(stored)) => stored.meta.clone(),
        (None, None) => Default::default(),
    };
    let body = match body {
        Some(body) => Some(body).filter(|b| !b.trim().is_empty()),
        None => stored.and_then(|s| s.body),
    };
    Ok(LocalizedContent { title, meta, body })
}

fn normalize_categories(categories: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(categories.len());
    for category in categories {
        let trimmed = category.trim();
        if !trimmed.is_empty() && !out.iter().any(|c| c == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}
