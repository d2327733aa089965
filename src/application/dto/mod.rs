pub mod auth;
pub mod documents;
pub mod search;
pub mod site;

pub use auth::Editor;
pub use documents::{DocumentDto, MetaDto};
pub use search::{SearchPageDto, SearchResultDto};
pub use site::{LayoutDto, LocaleOptionDto, LocalizationDto, NavItemDto, NavItemInput};
