pub mod toml_config;

use crate::domain::model::DomainKind;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::sync::Arc;

pub const DATA_SYNC_ENABLED_KEY: &str = "dataSyncEnabled";
pub const SCRIPT_ENDPOINT_URL_KEY: &str = "scriptEndpointUrl";

/// Persisted settings key holding a domain's spreadsheet share URL.
pub fn sheet_url_key(kind: DomainKind) -> &'static str {
    match kind {
        DomainKind::Courses => "coursesSheetUrl",
        DomainKind::TeamMembers => "teamMembersSheetUrl",
        DomainKind::GalleryItems => "galleryItemsSheetUrl",
        DomainKind::HomePageContent => "homePageContentSheetUrl",
        DomainKind::FooterContactInfo => "footerContactInfoSheetUrl",
        DomainKind::SocialMediaLinks => "socialMediaLinksSheetUrl",
    }
}

/// Sync configuration persisted in the same store as the content cache.
/// Setters write through immediately; getters read the live value, so an
/// admin toggle is visible to the next sync without any reload step.
pub struct SyncSettings<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> SyncSettings<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn sync_enabled(&self) -> bool {
        self.store
            .get(DATA_SYNC_ENABLED_KEY)
            .map(|v| v.trim() == "true")
            .unwrap_or(false)
    }

    pub fn set_sync_enabled(&self, enabled: bool) -> Result<()> {
        self.store
            .set(DATA_SYNC_ENABLED_KEY, if enabled { "true" } else { "false" })
    }

    pub fn script_endpoint(&self) -> Option<String> {
        self.store
            .get(SCRIPT_ENDPOINT_URL_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn set_script_endpoint(&self, url: &str) -> Result<()> {
        self.store.set(SCRIPT_ENDPOINT_URL_KEY, url.trim())
    }

    pub fn sheet_url(&self, kind: DomainKind) -> Option<String> {
        self.store
            .get(sheet_url_key(kind))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn set_sheet_url(&self, kind: DomainKind, url: &str) -> Result<()> {
        self.store.set(sheet_url_key(kind), url.trim())
    }
}
