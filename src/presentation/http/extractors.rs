// src/presentation/http/extractors.rs
use crate::{
    application::{dto::Editor, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub Editor);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<Editor>);

async fn app_state(parts: &mut Parts) -> Result<HttpState, HttpError> {
    let Extension(state) = Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(state)
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let editor = app_state
            .services
            .authenticate_editor(header.token())
            .map_err(HttpError::from_error)?;

        Ok(Self(editor))
    }
}

impl FromRequestParts<()> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts).await?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => {
                let editor = app_state
                    .services
                    .authenticate_editor(header.token())
                    .map_err(HttpError::from_error)?;
                Ok(Self(Some(editor)))
            }
            None => Ok(Self(None)),
        }
    }
}
