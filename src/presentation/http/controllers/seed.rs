// src/presentation/http/controllers/seed.rs
use crate::application::commands::seed::SeedReport;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/api/v1/seed",
    responses(
        (status = 200, description = "Default pages, posts and menus created; existing ones skipped.", body = SeedReport),
        (status = 401, description = "Editor token missing or invalid.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "System"
)]
pub async fn seed(
    Extension(state): Extension<HttpState>,
    Authenticated(editor): Authenticated,
) -> HttpResult<Json<SeedReport>> {
    tracing::info!(editor = %editor.name, "seeding requested");
    state.services.seed.seed().await.into_http().map(Json)
}
