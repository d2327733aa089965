// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{documents, navigation, search, seed, site},
    middleware::search_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Rate limiting keys on the client IP, which in-process tests cannot supply,
/// so they build the router with it disabled.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let search_route = if rate_limited {
        get(search::search_documents).layer(search_rate_limit_layer())
    } else {
        get(search::search_documents)
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/locales", get(site::list_locales))
        .route("/api/v1/seed", post(seed::seed))
        .route("/api/v1/{locale}/layout", get(site::get_layout))
        .route("/api/v1/{locale}/search", search_route)
        .route(
            "/api/v1/{locale}/navigation/{menu}",
            put(navigation::update_navigation),
        )
        .route(
            "/api/v1/{locale}/{collection}",
            get(documents::list_documents).post(documents::create_document),
        )
        .route(
            "/api/v1/{locale}/{collection}/{slug}",
            get(documents::get_document_by_slug),
        )
        .route(
            "/api/v1/{locale}/{collection}/id/{id}",
            put(documents::update_document).delete(documents::delete_document),
        )
        .route(
            "/api/v1/{locale}/{collection}/id/{id}/publish",
            post(documents::set_publish_state),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&AppConfig::allowed_origins_from_env()))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
