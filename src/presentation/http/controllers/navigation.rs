// src/presentation/http/controllers/navigation.rs
use super::require_locale;
use crate::application::{
    commands::navigation::UpdateNavigationCommand,
    dto::{NavItemDto, NavItemInput},
};
use crate::domain::navigation::Menu;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNavigationRequest {
    pub items: Vec<NavItemInput>,
}

#[utoipa::path(
    put,
    path = "/api/v1/{locale}/navigation/{menu}",
    params(
        ("locale" = String, Path, description = "Locale code."),
        ("menu" = String, Path, description = "`header` or `footer`.")
    ),
    request_body = UpdateNavigationRequest,
    responses(
        (status = 200, description = "Menu replaced.", body = [NavItemDto]),
        (status = 400, description = "Invalid items.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor token missing or invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown locale or menu.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Navigation"
)]
pub async fn update_navigation(
    Extension(state): Extension<HttpState>,
    _editor: Authenticated,
    Path((locale, menu)): Path<(String, String)>,
    Json(payload): Json<UpdateNavigationRequest>,
) -> HttpResult<Json<Vec<NavItemDto>>> {
    let locale = require_locale(&state, &locale)?;
    let menu = menu.parse::<Menu>().into_http()?;

    state
        .services
        .navigation_commands
        .update_navigation(UpdateNavigationCommand {
            menu,
            locale,
            items: payload.items,
        })
        .await
        .into_http()
        .map(Json)
}
