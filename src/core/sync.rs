use crate::config::SyncSettings;
use crate::core::cache::ContentCache;
use crate::core::mapping;
use crate::core::reader::SheetReader;
use crate::core::sheet_url::{extract_spreadsheet_id, resolve_export_url};
use crate::core::writer::{SheetWriter, WriteAck};
use crate::domain::model::{
    Course, DomainKind, FooterContactInfo, GalleryItem, HomePageContent, SocialMediaLinks,
    TeamMember,
};
use crate::domain::ports::{KeyValueStore, SheetTransport};
use crate::utils::error::{Result, SyncError};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_SHEET_INDEX: u32 = 0;

/// Per-domain result of a sync pass.
#[derive(Debug, Clone, Copy)]
pub struct DomainSyncOutcome {
    pub domain: DomainKind,
    /// Whether the cache was overwritten with live data.
    pub refreshed: bool,
    /// Records served after the pass; singletons count 0 or 1.
    pub records: usize,
}

/// Decides, per content domain, whether to serve the cache or attempt a
/// live read, and guarantees a failed sync never erases cached data.
///
/// Read path: `sync_*` is infallible by contract; the worst case is the
/// unchanged cache value. Write path: `write_*` persists to the cache
/// first, unconditionally, then propagates best-effort to the endpoint;
/// only propagation errors reach the caller.
pub struct SyncManager<S: KeyValueStore> {
    cache: ContentCache<S>,
    settings: SyncSettings<S>,
    reader: SheetReader,
    writer: SheetWriter,
}

impl<S: KeyValueStore> SyncManager<S> {
    pub fn new(store: Arc<S>, transport: Arc<dyn SheetTransport>) -> Self {
        Self {
            cache: ContentCache::new(store.clone()),
            settings: SyncSettings::new(store),
            reader: SheetReader::new(transport.clone()),
            writer: SheetWriter::new(transport),
        }
    }

    pub fn cache(&self) -> &ContentCache<S> {
        &self.cache
    }

    pub fn settings(&self) -> &SyncSettings<S> {
        &self.settings
    }

    /// Export URL for a domain, or `None` when the domain is effectively
    /// disabled: sync off, no sheet URL, or an unresolvable one.
    fn export_url(&self, kind: DomainKind) -> Option<String> {
        if !self.settings.sync_enabled() {
            return None;
        }
        let share_url = self.settings.sheet_url(kind)?;
        let resolved = resolve_export_url(&share_url, DEFAULT_SHEET_INDEX);
        if resolved.is_none() {
            tracing::warn!(
                "Sheet URL for {} does not look like a spreadsheet link, serving cache",
                kind
            );
        }
        resolved
    }

    fn commit_refresh(&self, kind: DomainKind, write: impl FnOnce() -> Result<()>) {
        if let Err(e) = write() {
            tracing::warn!("Failed to cache fresh {} data: {}", kind, e);
        }
        if let Err(e) = self.cache.set_last_synced(kind, Utc::now()) {
            tracing::debug!("Could not record last-synced time for {}: {}", kind, e);
        }
    }

    async fn sync_courses_inner(&self) -> (Vec<Course>, bool) {
        let Some(url) = self.export_url(DomainKind::Courses) else {
            return (self.cache.courses(), false);
        };
        match self.reader.fetch_courses(&url).await {
            Ok(fresh) if !fresh.is_empty() => {
                self.commit_refresh(DomainKind::Courses, || self.cache.set_courses(&fresh));
                (fresh, true)
            }
            Ok(_) => {
                tracing::debug!("Live read of courses returned no rows, serving cache");
                (self.cache.courses(), false)
            }
            Err(e) => {
                tracing::warn!("Sync of courses failed, serving cache: {}", e);
                (self.cache.courses(), false)
            }
        }
    }

    async fn sync_team_members_inner(&self) -> (Vec<TeamMember>, bool) {
        let Some(url) = self.export_url(DomainKind::TeamMembers) else {
            return (self.cache.team_members(), false);
        };
        match self.reader.fetch_team_members(&url).await {
            Ok(fresh) if !fresh.is_empty() => {
                self.commit_refresh(DomainKind::TeamMembers, || {
                    self.cache.set_team_members(&fresh)
                });
                (fresh, true)
            }
            Ok(_) => (self.cache.team_members(), false),
            Err(e) => {
                tracing::warn!("Sync of teamMembers failed, serving cache: {}", e);
                (self.cache.team_members(), false)
            }
        }
    }

    async fn sync_gallery_items_inner(&self) -> (Vec<GalleryItem>, bool) {
        let Some(url) = self.export_url(DomainKind::GalleryItems) else {
            return (self.cache.gallery_items(), false);
        };
        match self.reader.fetch_gallery_items(&url).await {
            Ok(fresh) if !fresh.is_empty() => {
                self.commit_refresh(DomainKind::GalleryItems, || {
                    self.cache.set_gallery_items(&fresh)
                });
                (fresh, true)
            }
            Ok(_) => (self.cache.gallery_items(), false),
            Err(e) => {
                tracing::warn!("Sync of galleryItems failed, serving cache: {}", e);
                (self.cache.gallery_items(), false)
            }
        }
    }

    async fn sync_home_page_content_inner(&self) -> (Option<HomePageContent>, bool) {
        let Some(url) = self.export_url(DomainKind::HomePageContent) else {
            return (self.cache.home_page_content(), false);
        };
        match self.reader.fetch_home_page_content(&url).await {
            Ok(Some(fresh)) => {
                self.commit_refresh(DomainKind::HomePageContent, || {
                    self.cache.set_home_page_content(&fresh)
                });
                (Some(fresh), true)
            }
            Ok(None) => (self.cache.home_page_content(), false),
            Err(e) => {
                tracing::warn!("Sync of homePageContent failed, serving cache: {}", e);
                (self.cache.home_page_content(), false)
            }
        }
    }

    async fn sync_footer_contact_info_inner(&self) -> (Option<FooterContactInfo>, bool) {
        let Some(url) = self.export_url(DomainKind::FooterContactInfo) else {
            return (self.cache.footer_contact_info(), false);
        };
        match self.reader.fetch_footer_contact_info(&url).await {
            Ok(Some(fresh)) => {
                self.commit_refresh(DomainKind::FooterContactInfo, || {
                    self.cache.set_footer_contact_info(&fresh)
                });
                (Some(fresh), true)
            }
            Ok(None) => (self.cache.footer_contact_info(), false),
            Err(e) => {
                tracing::warn!("Sync of footerContactInfo failed, serving cache: {}", e);
                (self.cache.footer_contact_info(), false)
            }
        }
    }

    async fn sync_social_links_inner(&self) -> (Option<SocialMediaLinks>, bool) {
        let Some(url) = self.export_url(DomainKind::SocialMediaLinks) else {
            return (self.cache.social_links(), false);
        };
        match self.reader.fetch_social_links(&url).await {
            Ok(Some(fresh)) => {
                self.commit_refresh(DomainKind::SocialMediaLinks, || {
                    self.cache.set_social_links(&fresh)
                });
                (Some(fresh), true)
            }
            Ok(None) => (self.cache.social_links(), false),
            Err(e) => {
                tracing::warn!("Sync of socialMediaLinks failed, serving cache: {}", e);
                (self.cache.social_links(), false)
            }
        }
    }

    pub async fn sync_courses(&self) -> Vec<Course> {
        self.sync_courses_inner().await.0
    }

    pub async fn sync_team_members(&self) -> Vec<TeamMember> {
        self.sync_team_members_inner().await.0
    }

    pub async fn sync_gallery_items(&self) -> Vec<GalleryItem> {
        self.sync_gallery_items_inner().await.0
    }

    pub async fn sync_home_page_content(&self) -> Option<HomePageContent> {
        self.sync_home_page_content_inner().await.0
    }

    pub async fn sync_footer_contact_info(&self) -> Option<FooterContactInfo> {
        self.sync_footer_contact_info_inner().await.0
    }

    pub async fn sync_social_links(&self) -> Option<SocialMediaLinks> {
        self.sync_social_links_inner().await.0
    }

    /// Unconditional entry point for one domain. Never fails; the worst
    /// case is serving whatever the cache already holds.
    pub async fn sync_domain(&self, kind: DomainKind) -> DomainSyncOutcome {
        let (records, refreshed) = match kind {
            DomainKind::Courses => {
                let (v, r) = self.sync_courses_inner().await;
                (v.len(), r)
            }
            DomainKind::TeamMembers => {
                let (v, r) = self.sync_team_members_inner().await;
                (v.len(), r)
            }
            DomainKind::GalleryItems => {
                let (v, r) = self.sync_gallery_items_inner().await;
                (v.len(), r)
            }
            DomainKind::HomePageContent => {
                let (v, r) = self.sync_home_page_content_inner().await;
                (usize::from(v.is_some()), r)
            }
            DomainKind::FooterContactInfo => {
                let (v, r) = self.sync_footer_contact_info_inner().await;
                (usize::from(v.is_some()), r)
            }
            DomainKind::SocialMediaLinks => {
                let (v, r) = self.sync_social_links_inner().await;
                (usize::from(v.is_some()), r)
            }
        };
        DomainSyncOutcome {
            domain: kind,
            refreshed,
            records,
        }
    }

    /// Syncs all six domains concurrently and waits for every one to
    /// settle. Domains are independent; one failing leaves the others
    /// untouched.
    pub async fn sync_all(&self) -> Vec<DomainSyncOutcome> {
        let (courses, team, gallery, home, footer, social) = tokio::join!(
            self.sync_domain(DomainKind::Courses),
            self.sync_domain(DomainKind::TeamMembers),
            self.sync_domain(DomainKind::GalleryItems),
            self.sync_domain(DomainKind::HomePageContent),
            self.sync_domain(DomainKind::FooterContactInfo),
            self.sync_domain(DomainKind::SocialMediaLinks),
        );
        vec![courses, team, gallery, home, footer, social]
    }

    /// Remote propagation after a cache write. `Ok(None)` means the write
    /// stayed local because no endpoint or sheet URL is configured.
    async fn propagate(&self, kind: DomainKind, rows: Vec<Vec<Value>>) -> Result<Option<WriteAck>> {
        let Some(endpoint) = self.settings.script_endpoint() else {
            tracing::debug!("No script endpoint configured, {} write stays local", kind);
            return Ok(None);
        };
        let Some(sheet_url) = self.settings.sheet_url(kind) else {
            tracing::debug!("No sheet URL configured for {}, write stays local", kind);
            return Ok(None);
        };
        let spreadsheet_id =
            extract_spreadsheet_id(&sheet_url).ok_or_else(|| SyncError::Config {
                message: format!("cannot extract spreadsheet id from {}", sheet_url),
            })?;
        let ack = self.writer.write(kind, rows, &endpoint, &spreadsheet_id).await?;
        tracing::info!("Pushed {} to spreadsheet {}", kind, spreadsheet_id);
        Ok(Some(ack))
    }

    pub async fn write_courses(&self, records: &[Course]) -> Result<Option<WriteAck>> {
        self.cache.set_courses(records)?;
        self.propagate(DomainKind::Courses, mapping::courses_to_rows(records))
            .await
    }

    pub async fn write_team_members(&self, records: &[TeamMember]) -> Result<Option<WriteAck>> {
        self.cache.set_team_members(records)?;
        self.propagate(
            DomainKind::TeamMembers,
            mapping::team_members_to_rows(records),
        )
        .await
    }

    pub async fn write_gallery_items(&self, records: &[GalleryItem]) -> Result<Option<WriteAck>> {
        self.cache.set_gallery_items(records)?;
        self.propagate(
            DomainKind::GalleryItems,
            mapping::gallery_items_to_rows(records),
        )
        .await
    }

    pub async fn write_home_page_content(
        &self,
        content: &HomePageContent,
    ) -> Result<Option<WriteAck>> {
        self.cache.set_home_page_content(content)?;
        self.propagate(
            DomainKind::HomePageContent,
            mapping::home_page_to_rows(content),
        )
        .await
    }

    pub async fn write_footer_contact_info(
        &self,
        info: &FooterContactInfo,
    ) -> Result<Option<WriteAck>> {
        self.cache.set_footer_contact_info(info)?;
        self.propagate(
            DomainKind::FooterContactInfo,
            mapping::footer_contact_to_rows(info),
        )
        .await
    }

    pub async fn write_social_links(&self, links: &SocialMediaLinks) -> Result<Option<WriteAck>> {
        self.cache.set_social_links(links)?;
        self.propagate(
            DomainKind::SocialMediaLinks,
            mapping::social_links_to_rows(links),
        )
        .await
    }
}
