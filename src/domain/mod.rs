pub mod document;
pub mod errors;
pub mod locale;
pub mod navigation;
pub mod slug;
