use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The six content domains served by the sync layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DomainKind {
    Courses,
    TeamMembers,
    GalleryItems,
    HomePageContent,
    FooterContactInfo,
    SocialMediaLinks,
}

impl DomainKind {
    pub const ALL: [DomainKind; 6] = [
        DomainKind::Courses,
        DomainKind::TeamMembers,
        DomainKind::GalleryItems,
        DomainKind::HomePageContent,
        DomainKind::FooterContactInfo,
        DomainKind::SocialMediaLinks,
    ];

    /// Wire name used as `sheetType` in the endpoint payload and as the
    /// base of the persisted settings keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainKind::Courses => "courses",
            DomainKind::TeamMembers => "teamMembers",
            DomainKind::GalleryItems => "galleryItems",
            DomainKind::HomePageContent => "homePageContent",
            DomainKind::FooterContactInfo => "footerContactInfo",
            DomainKind::SocialMediaLinks => "socialMediaLinks",
        }
    }

    /// Singleton domains hold exactly one logical record.
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            DomainKind::HomePageContent
                | DomainKind::FooterContactInfo
                | DomainKind::SocialMediaLinks
        )
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Kept as a string: the sheet holds display values like "999" or "Free".
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    pub duration: String,
    pub level: String,
    pub category: String,
    pub image_url: String,
    pub instructor: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub students: u64,
    #[serde(deserialize_with = "deserialize_features")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub description: String,
    pub image_url: String,
    pub email: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    #[default]
    Events,
    Students,
    Facilities,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Events => "events",
            GalleryCategory::Students => "students",
            GalleryCategory::Facilities => "facilities",
        }
    }

    /// Tolerant parse; unknown values fall back to the default category.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "students" => GalleryCategory::Students,
            "facilities" => GalleryCategory::Facilities,
            _ => GalleryCategory::Events,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: GalleryCategory,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub primary_button: String,
    pub secondary_button: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Learn Without Limits".to_string(),
            subtitle: "Quality education for every student, on any device.".to_string(),
            primary_button: "Browse Courses".to_string(),
            secondary_button: "Contact Us".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureBlock {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopularCoursesSection {
    pub section_title: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub show_count: u64,
    pub view_all_button: String,
}

impl Default for PopularCoursesSection {
    fn default() -> Self {
        Self {
            section_title: "Popular Courses".to_string(),
            show_count: 6,
            view_all_button: "View All Courses".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactSection {
    pub section_title: String,
    pub show_section: bool,
}

impl Default for ImpactSection {
    fn default() -> Self {
        Self {
            section_title: "Our Impact".to_string(),
            show_section: true,
        }
    }
}

/// Singleton content for the home page. Partial stored copies merge
/// field-by-field against these defaults on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePageContent {
    pub hero: HeroContent,
    pub features_section_title: String,
    pub feature_blocks: Vec<FeatureBlock>,
    pub popular_courses: PopularCoursesSection,
    pub impact: ImpactSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_name: String,
    pub tagline: String,
    pub stay_updated_title: String,
    pub stay_updated_description: String,
    pub website_name: String,
    pub website_title: String,
    pub welcome_message: String,
    pub copyright_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMediaLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
    pub whatsapp: Option<String>,
}

/// Id for records arriving without one: millisecond timestamp plus a
/// sub-millisecond suffix to keep ids generated in the same tick distinct.
pub fn generate_record_id() -> String {
    let now = Utc::now();
    let millis = now.timestamp_millis();
    let sub = now.timestamp_subsec_nanos() % 10_000;
    format!("{}{:04}", millis, sub)
}

/// Splits a legacy features cell: a JSON array string when it parses as one,
/// otherwise `|`-delimited. Empty segments are dropped.
pub fn split_features(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }
    trimmed
        .split('|')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
        Flag(bool),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => {
            if n.fract() == 0.0 {
                format!("{}", n as i64)
            } else {
                n.to_string()
            }
        }
        Some(Raw::Flag(b)) => b.to_string(),
        None => String::new(),
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => n,
        Some(Raw::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) if n >= 0.0 => n as u64,
        Some(Raw::Text(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn deserialize_features<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Delimited(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::List(items)) => items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Raw::Delimited(raw)) => split_features(&raw),
        None => Vec::new(),
    })
}
