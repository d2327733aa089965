// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            documents::DocumentCommandService, navigation::NavigationCommandService,
            seed::SeedService,
        },
        dto::Editor,
        ports::{security::EditorAuthenticator, time::Clock},
        queries::{documents::DocumentQueryService, site::SiteQueryService},
        ApplicationResult,
    },
    domain::{
        document::{DocumentReadRepository, DocumentWriteRepository},
        locale::Localization,
        navigation::NavigationRepository,
    },
};

pub struct ApplicationServices {
    pub document_commands: Arc<DocumentCommandService>,
    pub document_queries: Arc<DocumentQueryService>,
    pub navigation_commands: Arc<NavigationCommandService>,
    pub site_queries: Arc<SiteQueryService>,
    pub seed: Arc<SeedService>,
    localization: Arc<Localization>,
    editor_authenticator: Arc<dyn EditorAuthenticator>,
}

impl ApplicationServices {
    pub fn new(
        document_write_repo: Arc<dyn DocumentWriteRepository>,
        document_read_repo: Arc<dyn DocumentReadRepository>,
        navigation_repo: Arc<dyn NavigationRepository>,
        editor_authenticator: Arc<dyn EditorAuthenticator>,
        clock: Arc<dyn Clock>,
        localization: Localization,
        search_limit: u32,
    ) -> Self {
        let localization = Arc::new(localization);

        let document_commands = Arc::new(DocumentCommandService::new(
            Arc::clone(&document_write_repo),
            Arc::clone(&document_read_repo),
            Arc::clone(&localization),
            Arc::clone(&clock),
        ));

        let document_queries = Arc::new(DocumentQueryService::new(
            Arc::clone(&document_read_repo),
            Arc::clone(&localization),
            search_limit,
        ));

        let navigation_commands = Arc::new(NavigationCommandService::new(
            Arc::clone(&navigation_repo),
            Arc::clone(&localization),
        ));

        let site_queries = Arc::new(SiteQueryService::new(
            Arc::clone(&navigation_repo),
            Arc::clone(&localization),
        ));

        let seed = Arc::new(SeedService::new(
            Arc::clone(&document_commands),
            Arc::clone(&navigation_repo),
        ));

        Self {
            document_commands,
            document_queries,
            navigation_commands,
            site_queries,
            seed,
            localization,
            editor_authenticator,
        }
    }

    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    pub fn authenticate_editor(&self, token: &str) -> ApplicationResult<Editor> {
        self.editor_authenticator.authenticate(token)
    }
}
