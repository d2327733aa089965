// src/presentation/http/controllers/mod.rs
pub mod documents;
pub mod navigation;
pub mod search;
pub mod seed;
pub mod site;

use crate::domain::{document::Collection, locale::Locale};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    state::HttpState,
};

/// Unknown or disabled locale codes are a 404, like an unknown page.
pub(crate) fn require_locale(state: &HttpState, code: &str) -> HttpResult<Locale> {
    state.services.localization().require(code).into_http()
}

pub(crate) fn parse_collection(raw: &str) -> HttpResult<Collection> {
    raw.parse::<Collection>().into_http()
}
