// src/presentation/http/controllers/search.rs
use super::require_locale;
use crate::application::{dto::SearchPageDto, queries::documents::SearchDocumentsQuery};
use crate::domain::document::Collection;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search term; every word must occur in one of title, meta title,
    /// meta description or slug.
    #[serde(default)]
    pub q: Option<String>,
    /// Restrict results to `pages` or `posts`.
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/search",
    params(
        ("locale" = String, Path, description = "Locale code."),
        SearchParams
    ),
    responses(
        (status = 200, description = "Published documents matching the term.", body = SearchPageDto),
        (status = 400, description = "Invalid collection filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown locale.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    tag = "Search"
)]
pub async fn search_documents(
    Extension(state): Extension<HttpState>,
    Path(locale): Path<String>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchPageDto>> {
    let locale = require_locale(&state, &locale)?;
    let collection = params
        .collection
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            raw.parse::<Collection>().map_err(|_| {
                HttpError::new(
                    StatusCode::BAD_REQUEST,
                    format!("unknown collection '{raw}'"),
                )
            })
        })
        .transpose()?;

    state
        .services
        .document_queries
        .search_documents(SearchDocumentsQuery {
            q: params.q,
            locale,
            collection,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
