// src/presentation/http/controllers/site.rs
use super::require_locale;
use crate::application::{
    dto::{LayoutDto, LocalizationDto},
    queries::site::LayoutQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LayoutParams {
    /// Current page path; the matching header item is flagged `active`.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocalesParams {
    /// Locale the client asks for; unknown codes resolve to the default.
    #[serde(default)]
    pub locale: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/locales",
    params(LocalesParams),
    responses(
        (status = 200, description = "Configured locales, fallback policy and the resolved request locale.", body = LocalizationDto)
    ),
    tag = "Site"
)]
pub async fn list_locales(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LocalesParams>,
) -> Json<LocalizationDto> {
    Json(
        state
            .services
            .site_queries
            .localization(params.locale.as_deref()),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/{locale}/layout",
    params(
        ("locale" = String, Path, description = "Locale code, e.g. `uk` or `en`."),
        LayoutParams
    ),
    responses(
        (status = 200, description = "Header, footer and locale switcher data.", body = LayoutDto),
        (status = 404, description = "Unknown locale.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Site"
)]
pub async fn get_layout(
    Extension(state): Extension<HttpState>,
    Path(locale): Path<String>,
    Query(params): Query<LayoutParams>,
) -> HttpResult<Json<LayoutDto>> {
    let locale = require_locale(&state, &locale)?;
    state
        .services
        .site_queries
        .layout(LayoutQuery {
            locale,
            pathname: params.path,
        })
        .await
        .into_http()
        .map(Json)
}
