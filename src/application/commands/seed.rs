// src/application/commands/seed.rs
use std::sync::Arc;

use super::documents::{DocumentCommandService, SaveDocumentCommand};
use crate::{
    application::{
        dto::MetaDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        document::{Collection, HOME_SLUG},
        errors::DomainError,
        locale::Locale,
        navigation::{CmsLink, Menu, NavItem, NavigationRepository},
    },
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeedReport {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    pub menus: usize,
}

struct SeedDocument {
    collection: Collection,
    slug: Option<&'static str>,
    uk_title: &'static str,
    en_title: &'static str,
    description: &'static str,
    categories: &'static [&'static str],
}

const SEED_DOCUMENTS: &[SeedDocument] = &[
    SeedDocument {
        collection: Collection::Pages,
        slug: Some(HOME_SLUG),
        uk_title: "Головна",
        en_title: "Home",
        description: "Ласкаво просимо на наш сайт.",
        categories: &[],
    },
    SeedDocument {
        collection: Collection::Pages,
        slug: None,
        uk_title: "Про нас",
        en_title: "About us",
        description: "Хто ми і що робимо.",
        categories: &[],
    },
    SeedDocument {
        collection: Collection::Posts,
        slug: None,
        uk_title: "Перший допис",
        en_title: "First post",
        description: "Новини проєкту.",
        categories: &["Новини"],
    },
];

/// Fills an empty site with starter pages, a post and both menus.
pub struct SeedService {
    documents: Arc<DocumentCommandService>,
    navigation: Arc<dyn NavigationRepository>,
}

impl SeedService {
    pub fn new(
        documents: Arc<DocumentCommandService>,
        navigation: Arc<dyn NavigationRepository>,
    ) -> Self {
        Self {
            documents,
            navigation,
        }
    }

    pub async fn seed(&self) -> ApplicationResult<SeedReport> {
        let mut report = SeedReport::default();

        for seed in SEED_DOCUMENTS {
            let mut command = SaveDocumentCommand::create(seed.collection, Locale::Uk, seed.uk_title)
                .with_meta(MetaDto {
                    title: Some(seed.uk_title.to_string()),
                    description: Some(seed.description.to_string()),
                })
                .with_categories(seed.categories.iter().map(|c| c.to_string()).collect())
                .with_publish(true);
            if let Some(slug) = seed.slug {
                command = command.with_slug(slug);
            }

            match self.documents.save_document(command).await {
                Ok(created) => {
                    let translation =
                        SaveDocumentCommand::update(created.id, seed.collection, Locale::En)
                            .with_title(seed.en_title);
                    self.documents.save_document(translation).await?;
                    report.created.push(created.url);
                }
                Err(ApplicationError::Domain(DomainError::Conflict(_)))
                | Err(ApplicationError::Conflict(_)) => {
                    tracing::debug!(title = seed.uk_title, "seed document already present");
                    report.skipped.push(seed.uk_title.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        for locale in Locale::ALL {
            for menu in [Menu::Header, Menu::Footer] {
                if !self.navigation.items(menu, locale).await?.is_empty() {
                    continue;
                }
                self.navigation
                    .replace(menu, locale, default_menu(menu, locale)?)
                    .await?;
                report.menus += 1;
            }
        }

        tracing::info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            menus = report.menus,
            "seed finished"
        );
        Ok(report)
    }
}

fn default_menu(menu: Menu, locale: Locale) -> ApplicationResult<Vec<NavItem>> {
    let (home, about, news) = match locale {
        Locale::Uk => ("Головна", "Про нас", "Новини"),
        Locale::En => ("Home", "About us", "News"),
    };
    let items = match menu {
        Menu::Header => vec![
            NavItem::new(home, CmsLink::reference(Collection::Pages, HOME_SLUG))?,
            NavItem::new(about, CmsLink::reference(Collection::Pages, "pro-nas"))?,
            NavItem::new(news, CmsLink::reference(Collection::Posts, "pershyi-dopys"))?,
        ],
        Menu::Footer => vec![NavItem::new(about, CmsLink::reference(Collection::Pages, "pro-nas"))?],
    };
    Ok(items)
}
