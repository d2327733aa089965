// src/presentation/http/controllers/documents.rs
use super::{parse_collection, require_locale};
use crate::application::{
    commands::documents::{DeleteDocumentCommand, SaveDocumentCommand, SetPublishStateCommand},
    dto::{DocumentDto, MetaDto},
    queries::documents::{GetDocumentBySlugQuery, ListDocumentsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DocumentListParams {
    #[serde(default)]
    pub include_drafts: bool,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDocumentRequest {
    pub title: String,
    /// Optional explicit slug. When absent or empty it is derived from the title.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub slug: Option<Value>,
    #[serde(default)]
    pub meta: Option<MetaDto>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub publish: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDocumentRequest {
    #[serde(default)]
    pub title: Option<String>,
    /// A non-empty value replaces the stored slug; otherwise it is kept.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub slug: Option<Value>,
    #[serde(default)]
    pub meta: Option<MetaDto>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/{collection}",
    params(
        ("locale" = String, Path, description = "Locale code."),
        ("collection" = String, Path, description = "`pages` or `posts`."),
        DocumentListParams
    ),
    responses(
        (status = 200, description = "Documents of the collection, newest first.", body = [DocumentDto]),
        (status = 401, description = "Drafts requested without an editor token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown locale or collection.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn list_documents(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((locale, collection)): Path<(String, String)>,
    Query(params): Query<DocumentListParams>,
) -> HttpResult<Json<Vec<DocumentDto>>> {
    let locale = require_locale(&state, &locale)?;
    let collection = parse_collection(&collection)?;

    state
        .services
        .document_queries
        .list_documents(
            actor.0.as_ref(),
            ListDocumentsQuery {
                collection,
                locale,
                include_drafts: params.include_drafts,
                limit: params.limit,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/{collection}/{slug}",
    params(
        ("locale" = String, Path, description = "Locale code."),
        ("collection" = String, Path, description = "`pages` or `posts`."),
        ("slug" = String, Path, description = "Document slug.")
    ),
    responses(
        (status = 200, description = "The document in the requested locale, or the default locale as fallback.", body = DocumentDto),
        (status = 404, description = "Not found or not published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Documents"
)]
pub async fn get_document_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((locale, collection, slug)): Path<(String, String, String)>,
) -> HttpResult<Json<DocumentDto>> {
    let locale = require_locale(&state, &locale)?;
    let collection = parse_collection(&collection)?;

    state
        .services
        .document_queries
        .get_document_by_slug(
            actor.0.as_ref(),
            GetDocumentBySlugQuery {
                collection,
                slug,
                locale,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{locale}/{collection}",
    params(
        ("locale" = String, Path, description = "Locale the content is written in."),
        ("collection" = String, Path, description = "`pages` or `posts`.")
    ),
    request_body = CreateDocumentRequest,
    responses(
        (status = 200, description = "Document created.", body = DocumentDto),
        (status = 400, description = "Invalid payload or underivable slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor token missing or invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already used in this collection.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Documents"
)]
pub async fn create_document(
    Extension(state): Extension<HttpState>,
    _editor: Authenticated,
    Path((locale, collection)): Path<(String, String)>,
    Json(payload): Json<CreateDocumentRequest>,
) -> HttpResult<Json<DocumentDto>> {
    let locale = require_locale(&state, &locale)?;
    let collection = parse_collection(&collection)?;

    let command = SaveDocumentCommand {
        slug: payload.slug,
        meta: payload.meta,
        body: payload.body,
        categories: payload.categories,
        publish: payload.publish,
        ..SaveDocumentCommand::create(collection, locale, payload.title)
    };

    state
        .services
        .document_commands
        .save_document(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/{locale}/{collection}/id/{id}",
    params(
        ("locale" = String, Path, description = "Locale the content is written in."),
        ("collection" = String, Path, description = "`pages` or `posts`."),
        ("id" = i64, Path, description = "Document id.")
    ),
    request_body = UpdateDocumentRequest,
    responses(
        (status = 200, description = "Document updated.", body = DocumentDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor token missing or invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Document not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug taken or concurrent modification.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Documents"
)]
pub async fn update_document(
    Extension(state): Extension<HttpState>,
    _editor: Authenticated,
    Path((locale, collection, id)): Path<(String, String, i64)>,
    Json(payload): Json<UpdateDocumentRequest>,
) -> HttpResult<Json<DocumentDto>> {
    let locale = require_locale(&state, &locale)?;
    let collection = parse_collection(&collection)?;

    let command = SaveDocumentCommand {
        title: payload.title,
        slug: payload.slug,
        meta: payload.meta,
        body: payload.body,
        categories: payload.categories,
        publish: payload.publish,
        ..SaveDocumentCommand::update(id, collection, locale)
    };

    state
        .services
        .document_commands
        .save_document(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/{locale}/{collection}/id/{id}",
    params(
        ("locale" = String, Path, description = "Locale code."),
        ("collection" = String, Path, description = "`pages` or `posts`."),
        ("id" = i64, Path, description = "Document id.")
    ),
    responses(
        (status = 200, description = "Document and all its translations deleted."),
        (status = 401, description = "Editor token missing or invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Document not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Documents"
)]
pub async fn delete_document(
    Extension(state): Extension<HttpState>,
    _editor: Authenticated,
    Path((locale, collection, id)): Path<(String, String, i64)>,
) -> HttpResult<Json<Value>> {
    require_locale(&state, &locale)?;
    let collection = parse_collection(&collection)?;

    state
        .services
        .document_commands
        .delete_document(DeleteDocumentCommand { id, collection })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/{locale}/{collection}/id/{id}/publish",
    params(
        ("locale" = String, Path, description = "Locale the response is rendered in."),
        ("collection" = String, Path, description = "`pages` or `posts`."),
        ("id" = i64, Path, description = "Document id.")
    ),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Publish state updated.", body = DocumentDto),
        (status = 401, description = "Editor token missing or invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Document not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Documents"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    _editor: Authenticated,
    Path((locale, collection, id)): Path<(String, String, i64)>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<DocumentDto>> {
    let locale = require_locale(&state, &locale)?;
    let collection = parse_collection(&collection)?;

    state
        .services
        .document_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            collection,
            locale,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}
