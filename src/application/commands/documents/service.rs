// src/application/commands/documents/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        document::{DocumentReadRepository, DocumentWriteRepository},
        locale::Localization,
        slug::SlugField,
    },
};

pub struct DocumentCommandService {
    pub(super) write_repo: Arc<dyn DocumentWriteRepository>,
    pub(super) read_repo: Arc<dyn DocumentReadRepository>,
    pub(super) slug_field: SlugField,
    pub(super) localization: Arc<Localization>,
    pub(super) clock: Arc<dyn Clock>,
}

impl DocumentCommandService {
    pub fn new(
        write_repo: Arc<dyn DocumentWriteRepository>,
        read_repo: Arc<dyn DocumentReadRepository>,
        localization: Arc<Localization>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_field: SlugField::default(),
            localization,
            clock,
        }
    }
}
