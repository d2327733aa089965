pub mod documents;
pub mod site;
