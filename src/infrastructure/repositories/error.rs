// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_DOCUMENT_SLUG: &str = "documents_collection_slug_key";
const CNT_DOCUMENT_PUBLISHED_CHECK: &str = "documents_published_requires_timestamp_chk";
const CNT_DOCUMENT_LOCALE: &str = "document_locales_document_locale_key";
const CNT_DOCUMENT_LOCALE_PARENT: &str = "document_locales_document_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_DOCUMENT_SLUG => {
                        DomainError::Conflict("slug already exists in this collection".into())
                    }
                    CNT_DOCUMENT_LOCALE => {
                        DomainError::Conflict("translation already exists for this locale".into())
                    }
                    CNT_DOCUMENT_LOCALE_PARENT => DomainError::NotFound("document not found".into()),
                    CNT_DOCUMENT_PUBLISHED_CHECK => {
                        DomainError::Validation("published documents require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
