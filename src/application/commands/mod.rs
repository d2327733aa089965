pub mod documents;
pub mod navigation;
pub mod seed;
