use crate::config::SyncSettings;
use crate::core::transport::DEFAULT_TIMEOUT_SECONDS;
use crate::domain::model::DomainKind;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// TOML configuration file for the CLI. Seeds the persisted settings store
/// via [`TomlConfig::apply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sync: SyncSection,
    #[serde(default)]
    pub sheets: SheetsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSection {
    pub enabled: bool,
    pub script_endpoint: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetsSection {
    pub courses: Option<String>,
    pub team_members: Option<String>,
    pub gallery_items: Option<String>,
    pub home_page_content: Option<String>,
    pub footer_contact_info: Option<String>,
    pub social_media_links: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SyncError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| SyncError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn sheet_url(&self, kind: DomainKind) -> Option<&str> {
        let url = match kind {
            DomainKind::Courses => &self.sheets.courses,
            DomainKind::TeamMembers => &self.sheets.team_members,
            DomainKind::GalleryItems => &self.sheets.gallery_items,
            DomainKind::HomePageContent => &self.sheets.home_page_content,
            DomainKind::FooterContactInfo => &self.sheets.footer_contact_info,
            DomainKind::SocialMediaLinks => &self.sheets.social_media_links,
        };
        url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.sync
                .request_timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    /// Writes this configuration into the persisted settings store.
    pub fn apply<S: KeyValueStore>(&self, settings: &SyncSettings<S>) -> Result<()> {
        settings.set_sync_enabled(self.sync.enabled)?;
        if let Some(endpoint) = self.sync.script_endpoint.as_deref() {
            settings.set_script_endpoint(endpoint)?;
        }
        for kind in DomainKind::ALL {
            if let Some(url) = self.sheet_url(kind) {
                settings.set_sheet_url(kind, url)?;
            }
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = self.sync.script_endpoint.as_deref() {
            validate_url("sync.script_endpoint", endpoint)?;
        }
        for kind in DomainKind::ALL {
            if let Some(url) = self.sheet_url(kind) {
                validate_url(&format!("sheets.{}", kind), url)?;
            }
        }
        Ok(())
    }
}
