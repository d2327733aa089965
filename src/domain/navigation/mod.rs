pub mod entity;
pub mod repository;

pub use entity::{CmsLink, LinkTarget, Menu, NavItem};
pub use repository::NavigationRepository;
