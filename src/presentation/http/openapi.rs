// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::site::list_locales,
        crate::presentation::http::controllers::site::get_layout,
        crate::presentation::http::controllers::search::search_documents,
        crate::presentation::http::controllers::documents::list_documents,
        crate::presentation::http::controllers::documents::get_document_by_slug,
        crate::presentation::http::controllers::documents::create_document,
        crate::presentation::http::controllers::documents::update_document,
        crate::presentation::http::controllers::documents::delete_document,
        crate::presentation::http::controllers::documents::set_publish_state,
        crate::presentation::http::controllers::navigation::update_navigation,
        crate::presentation::http::controllers::seed::seed,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::documents::CreateDocumentRequest,
            crate::presentation::http::controllers::documents::UpdateDocumentRequest,
            crate::presentation::http::controllers::documents::PublishRequest,
            crate::presentation::http::controllers::navigation::UpdateNavigationRequest,
            crate::application::dto::DocumentDto,
            crate::application::dto::MetaDto,
            crate::application::dto::SearchPageDto,
            crate::application::dto::SearchResultDto,
            crate::application::dto::LayoutDto,
            crate::application::dto::NavItemDto,
            crate::application::dto::NavItemInput,
            crate::application::dto::LocaleOptionDto,
            crate::application::dto::LocalizationDto,
            crate::application::commands::seed::SeedReport
        )
    ),
    tags(
        (name = "Site", description = "Locales and site chrome"),
        (name = "Documents", description = "Localized pages and posts"),
        (name = "Search", description = "Full-text-ish search over published documents"),
        (name = "Navigation", description = "Header and footer menus"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Hromada CMS API",
        description = "Localized content backend for the Ukrainian/English site",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.description = Some("Shared editor token (`EDITOR_API_TOKEN`).".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
