pub mod config;
pub mod core;
pub mod domain;
pub mod store;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, SyncSettings};
pub use crate::core::cache::ContentCache;
pub use crate::core::reader::SheetReader;
pub use crate::core::sync::{DomainSyncOutcome, SyncManager};
pub use crate::core::transport::HttpTransport;
pub use crate::core::writer::{SheetWriter, WriteAck};
pub use crate::domain::model::{
    Course, DomainKind, FooterContactInfo, GalleryItem, HomePageContent, SocialMediaLinks,
    TeamMember,
};
pub use crate::domain::ports::{KeyValueStore, SheetTransport};
pub use crate::store::{FileStore, MemoryStore};
pub use crate::utils::error::{Result, SyncError};
