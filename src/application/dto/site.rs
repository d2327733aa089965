use crate::domain::locale::{LocaleOption, Localization};
use crate::domain::navigation::{LinkTarget, NavItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavItemDto {
    pub label: String,
    pub href: String,
    pub new_tab: bool,
    pub active: bool,
}

impl NavItemDto {
    pub fn render(item: &NavItem, pathname: Option<&str>) -> Self {
        Self {
            label: item.label.clone(),
            href: item.link.href(),
            new_tab: item.link.new_tab,
            active: pathname.is_some_and(|path| item.is_active(path)),
        }
    }
}

/// Editable form of a nav item, as submitted by editors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavItemInput {
    pub label: String,
    #[schema(value_type = Object)]
    pub link: LinkTarget,
    #[serde(default)]
    pub new_tab: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocaleOptionDto {
    pub code: String,
    pub label: String,
}

impl From<LocaleOption> for LocaleOptionDto {
    fn from(option: LocaleOption) -> Self {
        Self {
            code: option.code.to_string(),
            label: option.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizationDto {
    /// Locale a request for the given code is served in.
    pub current: String,
    pub default_locale: String,
    pub fallback: bool,
    pub locales: Vec<LocaleOptionDto>,
}

impl LocalizationDto {
    pub fn render(localization: &Localization, requested: Option<&str>) -> Self {
        Self {
            current: localization.resolve(requested).code().to_string(),
            default_locale: localization.default_locale().code().to_string(),
            fallback: localization.fallback(),
            locales: localization
                .switcher_options()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Data the site chrome (header, footer, locale switcher) renders from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LayoutDto {
    pub locale: String,
    pub header: Vec<NavItemDto>,
    pub footer: Vec<NavItemDto>,
    pub locales: Vec<LocaleOptionDto>,
}
