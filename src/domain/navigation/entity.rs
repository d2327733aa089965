// src/domain/navigation/entity.rs
use crate::domain::document::{Collection, document_url};
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Menu {
    Header,
    Footer,
}

impl Menu {
    pub fn as_str(&self) -> &'static str {
        match self {
            Menu::Header => "header",
            Menu::Footer => "footer",
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Menu {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(Menu::Header),
            "footer" => Ok(Menu::Footer),
            other => Err(DomainError::NotFound(format!("unknown menu '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LinkTarget {
    Custom { url: String },
    Reference { collection: Collection, slug: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsLink {
    pub target: LinkTarget,
    pub new_tab: bool,
}

impl CmsLink {
    pub fn custom(url: impl Into<String>) -> Self {
        Self {
            target: LinkTarget::Custom { url: url.into() },
            new_tab: false,
        }
    }

    pub fn reference(collection: Collection, slug: impl Into<String>) -> Self {
        Self {
            target: LinkTarget::Reference {
                collection,
                slug: slug.into(),
            },
            new_tab: false,
        }
    }

    pub fn href(&self) -> String {
        match &self.target {
            LinkTarget::Custom { url } => url.clone(),
            LinkTarget::Reference { collection, slug } => document_url(*collection, slug),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub link: CmsLink,
}

impl NavItem {
    pub fn new(label: impl Into<String>, link: CmsLink) -> DomainResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(DomainError::Validation("nav item label cannot be empty".into()));
        }
        if let LinkTarget::Custom { url } = &link.target {
            if url.trim().is_empty() {
                return Err(DomainError::Validation("custom link url cannot be empty".into()));
            }
        }
        if let LinkTarget::Reference { slug, .. } = &link.target {
            if slug.trim().is_empty() {
                return Err(DomainError::Validation(
                    "referenced document slug cannot be empty".into(),
                ));
            }
        }
        Ok(Self { label, link })
    }

    pub fn is_active(&self, pathname: &str) -> bool {
        self.link.href() == pathname
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_links_resolve_to_document_urls() {
        assert_eq!(CmsLink::reference(Collection::Pages, "home").href(), "/");
        assert_eq!(CmsLink::reference(Collection::Pages, "pro-nas").href(), "/pro-nas");
        assert_eq!(CmsLink::reference(Collection::Posts, "novyny").href(), "/posts/novyny");
    }

    #[test]
    fn custom_links_are_verbatim() {
        assert_eq!(CmsLink::custom("https://uz.gov.ua").href(), "https://uz.gov.ua");
    }

    #[test]
    fn active_when_path_matches_exactly() {
        let item = NavItem::new("Про нас", CmsLink::reference(Collection::Pages, "pro-nas")).unwrap();
        assert!(item.is_active("/pro-nas"));
        assert!(!item.is_active("/pro-nas/"));
        assert!(!item.is_active("/"));
    }

    #[test]
    fn blank_items_are_rejected() {
        assert!(NavItem::new(" ", CmsLink::custom("/a")).is_err());
        assert!(NavItem::new("A", CmsLink::custom("")).is_err());
        assert!(NavItem::new("A", CmsLink::reference(Collection::Pages, "")).is_err());
    }

    #[test]
    fn menu_parses() {
        assert_eq!("header".parse::<Menu>().unwrap(), Menu::Header);
        assert!("sidebar".parse::<Menu>().is_err());
    }
}
