// src/application/commands/navigation.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{NavItemDto, NavItemInput},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        locale::{Locale, Localization},
        navigation::{CmsLink, Menu, NavItem, NavigationRepository},
    },
};

pub const MAX_NAV_ITEMS: usize = 12;

pub struct UpdateNavigationCommand {
    pub menu: Menu,
    pub locale: Locale,
    pub items: Vec<NavItemInput>,
}

pub struct NavigationCommandService {
    repo: Arc<dyn NavigationRepository>,
    localization: Arc<Localization>,
}

impl NavigationCommandService {
    pub fn new(repo: Arc<dyn NavigationRepository>, localization: Arc<Localization>) -> Self {
        Self { repo, localization }
    }

    pub async fn update_navigation(
        &self,
        command: UpdateNavigationCommand,
    ) -> ApplicationResult<Vec<NavItemDto>> {
        if !self.localization.supports(command.locale) {
            return Err(ApplicationError::not_found(format!(
                "locale '{}' is not enabled",
                command.locale
            )));
        }
        if command.items.len() > MAX_NAV_ITEMS {
            return Err(ApplicationError::validation(format!(
                "a menu holds at most {MAX_NAV_ITEMS} items"
            )));
        }

        let items = command
            .items
            .into_iter()
            .map(|input| {
                NavItem::new(
                    input.label,
                    CmsLink {
                        target: input.link,
                        new_tab: input.new_tab,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.repo
            .replace(command.menu, command.locale, items.clone())
            .await?;
        tracing::info!(
            menu = %command.menu,
            locale = %command.locale,
            items = items.len(),
            "navigation replaced"
        );

        Ok(items.iter().map(|item| NavItemDto::render(item, None)).collect())
    }
}
