// src/infrastructure/repositories/postgres_navigation.rs
use super::map_sqlx;
use crate::domain::document::Collection;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::locale::Locale;
use crate::domain::navigation::{CmsLink, LinkTarget, Menu, NavItem, NavigationRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresNavigationRepository {
    pool: PgPool,
}

impl PostgresNavigationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NavItemRow {
    label: String,
    link_type: String,
    url: Option<String>,
    reference_collection: Option<String>,
    reference_slug: Option<String>,
    new_tab: bool,
}

impl TryFrom<NavItemRow> for NavItem {
    type Error = DomainError;

    fn try_from(row: NavItemRow) -> Result<Self, Self::Error> {
        let target = match row.link_type.as_str() {
            "custom" => LinkTarget::Custom {
                url: row.url.unwrap_or_default(),
            },
            "reference" => {
                let collection = row
                    .reference_collection
                    .as_deref()
                    .unwrap_or_default()
                    .parse::<Collection>()
                    .map_err(|_| {
                        DomainError::Persistence("nav item references an unknown collection".into())
                    })?;
                LinkTarget::Reference {
                    collection,
                    slug: row.reference_slug.unwrap_or_default(),
                }
            }
            other => {
                return Err(DomainError::Persistence(format!(
                    "unknown nav link type '{other}'"
                )));
            }
        };
        NavItem::new(
            row.label,
            CmsLink {
                target,
                new_tab: row.new_tab,
            },
        )
    }
}

struct NavItemColumns<'a> {
    link_type: &'static str,
    url: Option<&'a str>,
    reference_collection: Option<&'static str>,
    reference_slug: Option<&'a str>,
}

fn columns(link: &CmsLink) -> NavItemColumns<'_> {
    match &link.target {
        LinkTarget::Custom { url } => NavItemColumns {
            link_type: "custom",
            url: Some(url.as_str()),
            reference_collection: None,
            reference_slug: None,
        },
        LinkTarget::Reference { collection, slug } => NavItemColumns {
            link_type: "reference",
            url: None,
            reference_collection: Some(collection.as_str()),
            reference_slug: Some(slug.as_str()),
        },
    }
}

#[async_trait]
impl NavigationRepository for PostgresNavigationRepository {
    async fn items(&self, menu: Menu, locale: Locale) -> DomainResult<Vec<NavItem>> {
        let rows = sqlx::query_as::<_, NavItemRow>(
            "SELECT label, link_type, url, reference_collection, reference_slug, new_tab
             FROM nav_items WHERE menu = $1 AND locale = $2
             ORDER BY position ASC, id ASC",
        )
        .bind(menu.as_str())
        .bind(locale.code())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(NavItem::try_from).collect()
    }

    async fn replace(&self, menu: Menu, locale: Locale, items: Vec<NavItem>) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM nav_items WHERE menu = $1 AND locale = $2")
            .bind(menu.as_str())
            .bind(locale.code())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        for (position, item) in items.iter().enumerate() {
            let cols = columns(&item.link);
            sqlx::query(
                "INSERT INTO nav_items
                 (menu, locale, position, label, link_type, url, reference_collection, reference_slug, new_tab)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(menu.as_str())
            .bind(locale.code())
            .bind(position as i32)
            .bind(item.label.as_str())
            .bind(cols.link_type)
            .bind(cols.url)
            .bind(cols.reference_collection)
            .bind(cols.reference_slug)
            .bind(item.link.new_tab)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}
