// src/domain/navigation/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::locale::Locale;
use crate::domain::navigation::entity::{Menu, NavItem};
use async_trait::async_trait;

#[async_trait]
pub trait NavigationRepository: Send + Sync {
    /// Items of `menu` stored for exactly `locale`, in display order.
    async fn items(&self, menu: Menu, locale: Locale) -> DomainResult<Vec<NavItem>>;
    /// Replaces every item of `menu` in `locale`.
    async fn replace(&self, menu: Menu, locale: Locale, items: Vec<NavItem>) -> DomainResult<()>;
}
