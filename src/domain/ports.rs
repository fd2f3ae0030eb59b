use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistent key/value storage behind the cache and the sync settings.
/// In the browser deployment this is backed by local storage; here it is
/// injected so the sync layer can run against a file or an in-memory map.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Wire-level transport to the spreadsheet: CSV export on the read path,
/// JSON POST to the deployed script endpoint on the write path.
#[async_trait]
pub trait SheetTransport: Send + Sync {
    async fn fetch_csv(&self, url: &str) -> Result<String>;
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value>;
}
