// src/application/queries/documents/service.rs
use std::sync::Arc;

use crate::domain::{document::DocumentReadRepository, locale::Localization};

pub struct DocumentQueryService {
    pub(super) read_repo: Arc<dyn DocumentReadRepository>,
    pub(super) localization: Arc<Localization>,
    pub(super) search_limit: u32,
}

impl DocumentQueryService {
    pub fn new(
        read_repo: Arc<dyn DocumentReadRepository>,
        localization: Arc<Localization>,
        search_limit: u32,
    ) -> Self {
        Self {
            read_repo,
            localization,
            search_limit,
        }
    }
}
