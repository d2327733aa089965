pub mod localization;
pub mod value_objects;

pub use localization::{Localization, Localized};
pub use value_objects::{Locale, LocaleOption, parse_locale};
