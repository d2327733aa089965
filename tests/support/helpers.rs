// tests/support/helpers.rs
use super::mocks::{InMemoryDocuments, InMemoryNavigation, SteppingClock};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use hromada_cms::application::services::ApplicationServices;
use hromada_cms::domain::document::search::DEFAULT_SEARCH_LIMIT;
use hromada_cms::domain::locale::Localization;
use hromada_cms::infrastructure::security::StaticTokenAuthenticator;
use hromada_cms::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-editor-token-0123456789abcdef";

/// Services wired to fresh in-memory stores, plus handles on those stores.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub documents: Arc<InMemoryDocuments>,
    pub navigation: Arc<InMemoryNavigation>,
}

pub fn build_test_app_with(localization: Localization) -> TestApp {
    let documents = Arc::new(InMemoryDocuments::new(localization.clone()));
    let navigation = Arc::new(InMemoryNavigation::default());
    let authenticator =
        StaticTokenAuthenticator::new(TEST_TOKEN).expect("test token is long enough");

    let services = Arc::new(ApplicationServices::new(
        documents.clone(),
        documents.clone(),
        navigation.clone(),
        Arc::new(authenticator),
        Arc::new(SteppingClock::default()),
        localization,
        DEFAULT_SEARCH_LIMIT,
    ));

    TestApp {
        services,
        documents,
        navigation,
    }
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(Localization::default())
}

pub fn make_test_router_for(app: &TestApp) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&app.services),
    };
    build_router_with_rate_limiter(state, false)
}

pub fn make_test_router() -> axum::Router {
    make_test_router_for(&build_test_app())
}

pub fn json_request(method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Asserts the `{ error, message }` body every failing endpoint returns.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
}
