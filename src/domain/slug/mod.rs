pub mod format;
pub mod hook;
pub mod transliteration;

pub use format::{format_slug, is_slug_char, truncate_slug};
pub use hook::{FieldOperation, SLUG_FIELD, SlugField, SlugHookArgs};
pub use transliteration::{TRANSLITERATION_TABLE, transliterate};
