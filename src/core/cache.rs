use crate::domain::model::{
    Course, DomainKind, FooterContactInfo, GalleryItem, HomePageContent, SocialMediaLinks,
    TeamMember,
};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Candidate keys for courses, checked in priority order. The legacy
/// deployment wrote `courses`; newer ones write `coursesData`.
pub const COURSES_KEYS: [&str; 2] = ["coursesData", "courses"];
pub const TEAM_MEMBERS_KEY: &str = "teamMembers";
pub const GALLERY_ITEMS_KEY: &str = "galleryItems";
pub const HOME_PAGE_CONTENT_KEY: &str = "homePageContent";
pub const FOOTER_CONTACT_INFO_KEY: &str = "footerContactInfo";
pub const SOCIAL_MEDIA_LINKS_KEY: &str = "socialMediaLinks";

/// Expanded-features display state lives under its own key, keyed by course
/// id. It is never embedded in the course records and never pushed to the
/// spreadsheet.
const EXPANDED_FEATURES_KEY: &str = "expandedCourseFeatures";
const LAST_SYNCED_KEY: &str = "lastSyncedAt";

/// Last-known-good copy of every content domain, the source of truth for
/// the rendering layer.
pub struct ContentCache<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> ContentCache<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn read_json<T: DeserializeOwned>(&self, keys: &[&str]) -> Option<T> {
        for key in keys {
            if let Some(raw) = self.store.get(key) {
                match serde_json::from_str(&raw) {
                    Ok(value) => return Some(value),
                    Err(e) => {
                        tracing::warn!("Ignoring unreadable cache entry {}: {}", key, e);
                    }
                }
            }
        }
        None
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    pub fn courses(&self) -> Vec<Course> {
        self.read_json(&COURSES_KEYS).unwrap_or_default()
    }

    pub fn set_courses(&self, records: &[Course]) -> Result<()> {
        self.write_json(COURSES_KEYS[0], records)
    }

    pub fn team_members(&self) -> Vec<TeamMember> {
        self.read_json(&[TEAM_MEMBERS_KEY]).unwrap_or_default()
    }

    pub fn set_team_members(&self, records: &[TeamMember]) -> Result<()> {
        self.write_json(TEAM_MEMBERS_KEY, records)
    }

    pub fn gallery_items(&self) -> Vec<GalleryItem> {
        self.read_json(&[GALLERY_ITEMS_KEY]).unwrap_or_default()
    }

    pub fn set_gallery_items(&self, records: &[GalleryItem]) -> Result<()> {
        self.write_json(GALLERY_ITEMS_KEY, records)
    }

    pub fn home_page_content(&self) -> Option<HomePageContent> {
        self.read_json(&[HOME_PAGE_CONTENT_KEY])
    }

    pub fn set_home_page_content(&self, content: &HomePageContent) -> Result<()> {
        self.write_json(HOME_PAGE_CONTENT_KEY, content)
    }

    pub fn footer_contact_info(&self) -> Option<FooterContactInfo> {
        self.read_json(&[FOOTER_CONTACT_INFO_KEY])
    }

    pub fn set_footer_contact_info(&self, info: &FooterContactInfo) -> Result<()> {
        self.write_json(FOOTER_CONTACT_INFO_KEY, info)
    }

    pub fn social_links(&self) -> Option<SocialMediaLinks> {
        self.read_json(&[SOCIAL_MEDIA_LINKS_KEY])
    }

    pub fn set_social_links(&self, links: &SocialMediaLinks) -> Result<()> {
        self.write_json(SOCIAL_MEDIA_LINKS_KEY, links)
    }

    /// Number of cached records for a domain; singletons count 0 or 1.
    pub fn record_count(&self, kind: DomainKind) -> usize {
        match kind {
            DomainKind::Courses => self.courses().len(),
            DomainKind::TeamMembers => self.team_members().len(),
            DomainKind::GalleryItems => self.gallery_items().len(),
            DomainKind::HomePageContent => usize::from(self.home_page_content().is_some()),
            DomainKind::FooterContactInfo => usize::from(self.footer_contact_info().is_some()),
            DomainKind::SocialMediaLinks => usize::from(self.social_links().is_some()),
        }
    }

    pub fn expanded_course_ids(&self) -> HashSet<String> {
        self.read_json(&[EXPANDED_FEATURES_KEY]).unwrap_or_default()
    }

    pub fn set_course_expanded(&self, course_id: &str, expanded: bool) -> Result<()> {
        let mut ids = self.expanded_course_ids();
        if expanded {
            ids.insert(course_id.to_string());
        } else {
            ids.remove(course_id);
        }
        self.write_json(EXPANDED_FEATURES_KEY, &ids)
    }

    pub fn last_synced(&self, kind: DomainKind) -> Option<DateTime<Utc>> {
        let map: HashMap<String, DateTime<Utc>> =
            self.read_json(&[LAST_SYNCED_KEY]).unwrap_or_default();
        map.get(kind.as_str()).copied()
    }

    pub fn set_last_synced(&self, kind: DomainKind, at: DateTime<Utc>) -> Result<()> {
        let mut map: HashMap<String, DateTime<Utc>> =
            self.read_json(&[LAST_SYNCED_KEY]).unwrap_or_default();
        map.insert(kind.as_str().to_string(), at);
        self.write_json(LAST_SYNCED_KEY, &map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn cache() -> ContentCache<MemoryStore> {
        ContentCache::new(Arc::new(MemoryStore::new()))
    }

    fn course(id: &str, title: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            ..Course::default()
        }
    }

    #[test]
    fn test_courses_roundtrip_uses_primary_key() {
        let cache = cache();
        cache.set_courses(&[course("1", "Web Dev")]).unwrap();

        let read = cache.courses();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].title, "Web Dev");
    }

    #[test]
    fn test_courses_legacy_key_fallback() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("courses", r#"[{"id":"9","title":"Legacy Course"}]"#)
            .unwrap();
        let cache = ContentCache::new(store);

        let read = cache.courses();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, "9");
    }

    #[test]
    fn test_primary_key_wins_over_legacy() {
        let store = Arc::new(MemoryStore::new());
        store.set("courses", r#"[{"id":"old"}]"#).unwrap();
        store.set("coursesData", r#"[{"id":"new"}]"#).unwrap();
        let cache = ContentCache::new(store);

        assert_eq!(cache.courses()[0].id, "new");
    }

    #[test]
    fn test_corrupt_primary_falls_through_to_legacy() {
        let store = Arc::new(MemoryStore::new());
        store.set("coursesData", "{not json").unwrap();
        store.set("courses", r#"[{"id":"ok"}]"#).unwrap();
        let cache = ContentCache::new(store);

        assert_eq!(cache.courses()[0].id, "ok");
    }

    #[test]
    fn test_singleton_absent_vs_partial() {
        let cache = cache();
        assert!(cache.footer_contact_info().is_none());

        let store = Arc::new(MemoryStore::new());
        store
            .set("homePageContent", r#"{"hero":{"title":"Hi"}}"#)
            .unwrap();
        let cache = ContentCache::new(store);
        let content = cache.home_page_content().unwrap();
        assert_eq!(content.hero.title, "Hi");
        assert_eq!(content.popular_courses.show_count, 6);
    }

    #[test]
    fn test_legacy_features_string_in_cache() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("coursesData", r#"[{"id":"1","features":"a|b|c"}]"#)
            .unwrap();
        let cache = ContentCache::new(store);

        assert_eq!(cache.courses()[0].features, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_expanded_flags_live_outside_course_records() {
        let cache = cache();
        cache.set_courses(&[course("1", "Web Dev")]).unwrap();
        cache.set_course_expanded("1", true).unwrap();

        assert!(cache.expanded_course_ids().contains("1"));
        // Toggling display state does not touch the synced records.
        assert_eq!(cache.courses(), vec![course("1", "Web Dev")]);

        cache.set_course_expanded("1", false).unwrap();
        assert!(cache.expanded_course_ids().is_empty());
    }

    #[test]
    fn test_last_synced_per_domain() {
        let cache = cache();
        assert!(cache.last_synced(DomainKind::Courses).is_none());

        let now = Utc::now();
        cache.set_last_synced(DomainKind::Courses, now).unwrap();
        assert_eq!(cache.last_synced(DomainKind::Courses), Some(now));
        assert!(cache.last_synced(DomainKind::TeamMembers).is_none());
    }
}
