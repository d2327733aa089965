// src/infrastructure/repositories/postgres_document.rs
use super::map_sqlx;
use crate::domain::document::search::escape_like;
use crate::domain::document::{
    Collection, Document, DocumentId, DocumentMeta, DocumentReadRepository, DocumentSlug,
    DocumentTitle, DocumentUpdate, DocumentWriteRepository, LocalizedContent, NewDocument,
    SearchCriteria,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::locale::{Locale, Localization, Localized};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;

const DOCUMENT_COLUMNS: &str =
    "d.id, d.collection, d.slug, d.categories, d.published, d.published_at, d.created_at, d.updated_at";
const RETURNING_DOCUMENT: &str = " RETURNING id, collection, slug, categories, published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresDocumentWriteRepository {
    pool: PgPool,
}

impl PostgresDocumentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresDocumentReadRepository {
    pool: PgPool,
    localization: Arc<Localization>,
}

impl PostgresDocumentReadRepository {
    pub fn new(pool: PgPool, localization: Arc<Localization>) -> Self {
        Self { pool, localization }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    collection: String,
    slug: String,
    categories: Vec<String>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct SearchRow {
    #[sqlx(flatten)]
    document: DocumentRow,
    total: i64,
}

#[derive(Debug, FromRow)]
struct LocaleRow {
    document_id: i64,
    locale: String,
    title: String,
    meta_title: Option<String>,
    meta_description: Option<String>,
    body: Option<String>,
}

impl LocaleRow {
    fn into_content(self) -> DomainResult<(Locale, LocalizedContent)> {
        let locale = self
            .locale
            .parse::<Locale>()
            .map_err(|_| DomainError::Persistence(format!("unknown stored locale '{}'", self.locale)))?;
        Ok((
            locale,
            LocalizedContent {
                title: DocumentTitle::new(self.title)?,
                meta: DocumentMeta {
                    title: self.meta_title,
                    description: self.meta_description,
                },
                body: self.body,
            },
        ))
    }
}

fn build_document(row: DocumentRow, content: Localized<LocalizedContent>) -> DomainResult<Document> {
    let collection = row
        .collection
        .parse::<Collection>()
        .map_err(|_| DomainError::Persistence(format!("unknown stored collection '{}'", row.collection)))?;
    Ok(Document {
        id: DocumentId::new(row.id)?,
        collection,
        slug: DocumentSlug::new(row.slug)?,
        content,
        categories: row.categories,
        published: row.published,
        published_at: row.published_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

async fn fetch_locales(
    conn: &mut PgConnection,
    ids: &[i64],
) -> DomainResult<HashMap<i64, Localized<LocalizedContent>>> {
    let mut by_document: HashMap<i64, Localized<LocalizedContent>> = HashMap::new();
    if ids.is_empty() {
        return Ok(by_document);
    }

    let rows = sqlx::query_as::<_, LocaleRow>(
        "SELECT document_id, locale, title, meta_title, meta_description, body
         FROM document_locales WHERE document_id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    for row in rows {
        let document_id = row.document_id;
        let (locale, content) = row.into_content()?;
        by_document.entry(document_id).or_default().set(locale, content);
    }
    Ok(by_document)
}

async fn assemble(conn: &mut PgConnection, rows: Vec<DocumentRow>) -> DomainResult<Vec<Document>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut locales = fetch_locales(conn, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let content = locales.remove(&row.id).unwrap_or_default();
            build_document(row, content)
        })
        .collect()
}

async fn upsert_locale(
    conn: &mut PgConnection,
    document_id: i64,
    locale: Locale,
    content: &LocalizedContent,
) -> DomainResult<()> {
    sqlx::query(
        "INSERT INTO document_locales (document_id, locale, title, meta_title, meta_description, body)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (document_id, locale) DO UPDATE
         SET title = EXCLUDED.title,
             meta_title = EXCLUDED.meta_title,
             meta_description = EXCLUDED.meta_description,
             body = EXCLUDED.body",
    )
    .bind(document_id)
    .bind(locale.code())
    .bind(content.title.as_str())
    .bind(content.meta.title.as_deref())
    .bind(content.meta.description.as_deref())
    .bind(content.body.as_deref())
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl DocumentWriteRepository for PostgresDocumentWriteRepository {
    async fn insert(&self, document: NewDocument) -> DomainResult<Document> {
        let NewDocument {
            collection,
            slug,
            locale,
            content,
            categories,
            published,
            published_at,
            created_at,
            updated_at,
        } = document;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "INSERT INTO documents (collection, slug, categories, published, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7){RETURNING_DOCUMENT}"
        ))
        .bind(collection.as_str())
        .bind(slug.as_str())
        .bind(categories)
        .bind(published)
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        upsert_locale(&mut tx, row.id, locale, &content).await?;
        tx.commit().await.map_err(map_sqlx)?;

        build_document(row, Localized::single(locale, content))
    }

    async fn update(&self, update: DocumentUpdate) -> DomainResult<Document> {
        let DocumentUpdate {
            id,
            slug,
            content,
            categories,
            publish_state,
            original_updated_at,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE documents SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(categories) = categories {
            builder.push(", categories = ");
            builder.push_bind(categories);
        }

        if let Some(state) = publish_state {
            builder.push(", published = ");
            builder.push_bind(state.published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(RETURNING_DOCUMENT);

        let row = builder
            .build_query_as::<DocumentRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::Conflict("document update conflict, please retry".into()))?;

        if let Some((locale, content)) = &content {
            upsert_locale(&mut tx, row.id, *locale, content).await?;
        }

        let mut documents = assemble(&mut tx, vec![row]).await?;
        tx.commit().await.map_err(map_sqlx)?;

        documents
            .pop()
            .ok_or_else(|| DomainError::Persistence("updated document vanished".into()))
    }

    async fn delete(&self, id: DocumentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("document not found".into()));
        }
        Ok(())
    }
}

impl PostgresDocumentReadRepository {
    /// Joins the row of the requested locale, or the default locale's row when
    /// fallback is enabled and the requested one is missing.
    fn push_content_join(&self, builder: &mut QueryBuilder<'_, Postgres>, locale: Locale) {
        let fallback = if self.localization.fallback() {
            self.localization.default_locale()
        } else {
            locale
        };
        builder.push(
            " LEFT JOIN LATERAL (SELECT x.title, x.meta_title, x.meta_description
               FROM document_locales x WHERE x.document_id = d.id AND x.locale IN (",
        );
        builder.push_bind(locale.code());
        builder.push(", ");
        builder.push_bind(fallback.code());
        builder.push(") ORDER BY (x.locale = ");
        builder.push_bind(locale.code());
        builder.push(") DESC LIMIT 1) c ON TRUE");
    }

    fn push_term_conditions(builder: &mut QueryBuilder<'_, Postgres>, words: &[String]) {
        if words.is_empty() {
            return;
        }
        let patterns: Vec<String> = words
            .iter()
            .map(|word| format!("%{}%", escape_like(word)))
            .collect();

        builder.push(" AND (");
        for (index, field) in ["c.title", "c.meta_title", "c.meta_description", "d.slug"]
            .iter()
            .enumerate()
        {
            if index > 0 {
                builder.push(" OR ");
            }
            builder.push("(");
            for (word_index, pattern) in patterns.iter().enumerate() {
                if word_index > 0 {
                    builder.push(" AND ");
                }
                builder.push(*field);
                builder.push(" ILIKE ");
                builder.push_bind(pattern.clone());
            }
            builder.push(")");
        }
        builder.push(")");
    }
}

#[async_trait]
impl DocumentReadRepository for PostgresDocumentReadRepository {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents d WHERE d.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(assemble(&mut conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_slug(
        &self,
        collection: Collection,
        slug: &DocumentSlug,
    ) -> DomainResult<Option<Document>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents d WHERE d.collection = $1 AND d.slug = $2"
        ))
        .bind(collection.as_str())
        .bind(slug.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(assemble(&mut conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        collection: Collection,
        include_drafts: bool,
        limit: u32,
    ) -> DomainResult<Vec<Document>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents d WHERE d.collection = "
        ));
        builder.push_bind(collection.as_str());
        if !include_drafts {
            builder.push(" AND d.published = TRUE");
        }
        builder.push(" ORDER BY d.created_at DESC, d.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<DocumentRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        assemble(&mut conn, rows).await
    }

    async fn search(&self, criteria: &SearchCriteria) -> DomainResult<(Vec<Document>, u64)> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {DOCUMENT_COLUMNS}, COUNT(*) OVER () AS total FROM documents d"
        ));
        self.push_content_join(&mut builder, criteria.locale);
        builder.push(" WHERE d.published = TRUE");

        if let Some(collection) = criteria.collection {
            builder.push(" AND d.collection = ");
            builder.push_bind(collection.as_str());
        }

        Self::push_term_conditions(&mut builder, &criteria.words());

        builder.push(" ORDER BY d.created_at DESC, d.id DESC LIMIT ");
        builder.push_bind(i64::from(criteria.limit));

        let rows = builder
            .build_query_as::<SearchRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let total = rows.first().map(|row| row.total.max(0) as u64).unwrap_or(0);
        let documents = assemble(&mut conn, rows.into_iter().map(|row| row.document).collect()).await?;
        Ok((documents, total))
    }
}
