// src/application/queries/site.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{LayoutDto, LocalizationDto, NavItemDto},
        error::ApplicationResult,
    },
    domain::{
        locale::{Locale, Localization},
        navigation::{Menu, NavItem, NavigationRepository},
    },
};

pub struct LayoutQuery {
    pub locale: Locale,
    /// Current path, used to flag the active header item.
    pub pathname: Option<String>,
}

pub struct SiteQueryService {
    navigation: Arc<dyn NavigationRepository>,
    localization: Arc<Localization>,
}

impl SiteQueryService {
    pub fn new(navigation: Arc<dyn NavigationRepository>, localization: Arc<Localization>) -> Self {
        Self {
            navigation,
            localization,
        }
    }

    /// Localization summary; `requested` is resolved to a configured locale,
    /// falling back to the default.
    pub fn localization(&self, requested: Option<&str>) -> LocalizationDto {
        LocalizationDto::render(&self.localization, requested)
    }

    pub async fn layout(&self, query: LayoutQuery) -> ApplicationResult<LayoutDto> {
        let pathname = query.pathname.as_deref();
        let header = self.menu_items(Menu::Header, query.locale).await?;
        let footer = self.menu_items(Menu::Footer, query.locale).await?;

        Ok(LayoutDto {
            locale: query.locale.code().to_string(),
            header: header
                .iter()
                .map(|item| NavItemDto::render(item, pathname))
                .collect(),
            footer: footer
                .iter()
                .map(|item| NavItemDto::render(item, pathname))
                .collect(),
            locales: self
                .localization
                .switcher_options()
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }

    /// Items for `locale`, or the default locale's items when the locale has
    /// none and fallback is enabled.
    async fn menu_items(&self, menu: Menu, locale: Locale) -> ApplicationResult<Vec<NavItem>> {
        let items = self.navigation.items(menu, locale).await?;
        let default = self.localization.default_locale();
        if items.is_empty() && self.localization.fallback() && locale != default {
            return Ok(self.navigation.items(menu, default).await?);
        }
        Ok(items)
    }
}
