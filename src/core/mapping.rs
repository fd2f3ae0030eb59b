use crate::domain::model::{
    generate_record_id, split_features, Course, DomainKind, FeatureBlock, FooterContactInfo,
    GalleryCategory, GalleryItem, HomePageContent, SocialMediaLinks, TeamMember,
};
use serde_json::{json, Value};
use std::collections::HashMap;

/// A parsed CSV data row, keyed by header cell.
pub type Row = HashMap<String, String>;

pub const COURSE_HEADERS: [&str; 12] = [
    "id",
    "title",
    "description",
    "price",
    "duration",
    "level",
    "category",
    "imageUrl",
    "instructor",
    "rating",
    "students",
    "features",
];

pub const TEAM_MEMBER_HEADERS: [&str; 7] = [
    "id",
    "name",
    "position",
    "description",
    "imageUrl",
    "email",
    "linkedin",
];

pub const GALLERY_ITEM_HEADERS: [&str; 5] = ["id", "title", "description", "category", "imageUrl"];

pub const HOME_PAGE_HEADERS: [&str; 19] = [
    "heroTitle",
    "heroSubtitle",
    "heroPrimaryButton",
    "heroSecondaryButton",
    "featuresSectionTitle",
    "feature1Icon",
    "feature1Title",
    "feature1Description",
    "feature2Icon",
    "feature2Title",
    "feature2Description",
    "feature3Icon",
    "feature3Title",
    "feature3Description",
    "popularCoursesSectionTitle",
    "popularCoursesShowCount",
    "popularCoursesViewAllButton",
    "impactSectionTitle",
    "impactShowSection",
];

pub const FOOTER_CONTACT_HEADERS: [&str; 11] = [
    "email",
    "phone",
    "address",
    "companyName",
    "tagline",
    "stayUpdatedTitle",
    "stayUpdatedDescription",
    "websiteName",
    "websiteTitle",
    "welcomeMessage",
    "copyrightText",
];

pub const SOCIAL_LINKS_HEADERS: [&str; 6] = [
    "facebook",
    "twitter",
    "instagram",
    "linkedin",
    "youtube",
    "whatsapp",
];

/// Column order for a domain. The writer formats rows and the reader maps
/// them against this same constant, so the two directions cannot drift.
pub fn headers(kind: DomainKind) -> &'static [&'static str] {
    match kind {
        DomainKind::Courses => &COURSE_HEADERS,
        DomainKind::TeamMembers => &TEAM_MEMBER_HEADERS,
        DomainKind::GalleryItems => &GALLERY_ITEM_HEADERS,
        DomainKind::HomePageContent => &HOME_PAGE_HEADERS,
        DomainKind::FooterContactInfo => &FOOTER_CONTACT_HEADERS,
        DomainKind::SocialMediaLinks => &SOCIAL_LINKS_HEADERS,
    }
}

fn field(row: &Row, name: &str) -> String {
    row.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn non_empty(row: &Row, name: &str) -> Option<String> {
    let value = field(row, name);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_flag(row: &Row, name: &str, default: bool) -> bool {
    match non_empty(row, name) {
        Some(value) => matches!(
            value.to_ascii_lowercase().as_str(),
            "true" | "1" | "yes"
        ),
        None => default,
    }
}

pub fn course_from_row(row: &Row) -> Course {
    let id = match non_empty(row, "id") {
        Some(id) => id,
        None => generate_record_id(),
    };
    Course {
        id,
        title: field(row, "title"),
        description: field(row, "description"),
        price: field(row, "price"),
        duration: field(row, "duration"),
        level: field(row, "level"),
        category: field(row, "category"),
        image_url: field(row, "imageUrl"),
        instructor: field(row, "instructor"),
        rating: field(row, "rating").parse().unwrap_or(0.0),
        students: field(row, "students").parse().unwrap_or(0),
        features: split_features(&field(row, "features")),
    }
}

pub fn courses_from_rows(rows: &[Row]) -> Vec<Course> {
    rows.iter().map(course_from_row).collect()
}

pub fn course_to_row(course: &Course) -> Vec<Value> {
    vec![
        json!(course.id),
        json!(course.title),
        json!(course.description),
        json!(course.price),
        json!(course.duration),
        json!(course.level),
        json!(course.category),
        json!(course.image_url),
        json!(course.instructor),
        json!(course.rating),
        json!(course.students),
        json!(course.features.join("|")),
    ]
}

pub fn courses_to_rows(records: &[Course]) -> Vec<Vec<Value>> {
    records.iter().map(course_to_row).collect()
}

pub fn team_member_from_row(row: &Row) -> TeamMember {
    let id = match non_empty(row, "id") {
        Some(id) => id,
        None => generate_record_id(),
    };
    TeamMember {
        id,
        name: field(row, "name"),
        position: field(row, "position"),
        description: field(row, "description"),
        image_url: field(row, "imageUrl"),
        email: field(row, "email"),
        linkedin: field(row, "linkedin"),
    }
}

pub fn team_members_from_rows(rows: &[Row]) -> Vec<TeamMember> {
    rows.iter().map(team_member_from_row).collect()
}

pub fn team_members_to_rows(records: &[TeamMember]) -> Vec<Vec<Value>> {
    records
        .iter()
        .map(|m| {
            vec![
                json!(m.id),
                json!(m.name),
                json!(m.position),
                json!(m.description),
                json!(m.image_url),
                json!(m.email),
                json!(m.linkedin),
            ]
        })
        .collect()
}

pub fn gallery_item_from_row(row: &Row) -> GalleryItem {
    let id = match non_empty(row, "id") {
        Some(id) => id,
        None => generate_record_id(),
    };
    GalleryItem {
        id,
        title: field(row, "title"),
        description: field(row, "description"),
        category: GalleryCategory::parse(&field(row, "category")),
        image_url: field(row, "imageUrl"),
    }
}

pub fn gallery_items_from_rows(rows: &[Row]) -> Vec<GalleryItem> {
    rows.iter().map(gallery_item_from_row).collect()
}

pub fn gallery_items_to_rows(records: &[GalleryItem]) -> Vec<Vec<Value>> {
    records
        .iter()
        .map(|g| {
            vec![
                json!(g.id),
                json!(g.title),
                json!(g.description),
                json!(g.category.as_str()),
                json!(g.image_url),
            ]
        })
        .collect()
}

/// Singleton mappers read only the first data row; zero rows means
/// "nothing to sync yet" and maps to `None`.
pub fn home_page_from_rows(rows: &[Row]) -> Option<HomePageContent> {
    let row = rows.first()?;
    let defaults = HomePageContent::default();

    let block = |n: usize, fallback: &FeatureBlock| FeatureBlock {
        icon: non_empty(row, &format!("feature{}Icon", n)).unwrap_or_else(|| fallback.icon.clone()),
        title: non_empty(row, &format!("feature{}Title", n))
            .unwrap_or_else(|| fallback.title.clone()),
        description: non_empty(row, &format!("feature{}Description", n))
            .unwrap_or_else(|| fallback.description.clone()),
    };
    let default_block = FeatureBlock::default();
    let feature_blocks = (1..=3)
        .map(|n| {
            let fallback = defaults.feature_blocks.get(n - 1).unwrap_or(&default_block);
            block(n, fallback)
        })
        .collect();

    Some(HomePageContent {
        hero: crate::domain::model::HeroContent {
            title: non_empty(row, "heroTitle").unwrap_or(defaults.hero.title),
            subtitle: non_empty(row, "heroSubtitle").unwrap_or(defaults.hero.subtitle),
            primary_button: non_empty(row, "heroPrimaryButton")
                .unwrap_or(defaults.hero.primary_button),
            secondary_button: non_empty(row, "heroSecondaryButton")
                .unwrap_or(defaults.hero.secondary_button),
        },
        features_section_title: non_empty(row, "featuresSectionTitle")
            .unwrap_or(defaults.features_section_title),
        feature_blocks,
        popular_courses: crate::domain::model::PopularCoursesSection {
            section_title: non_empty(row, "popularCoursesSectionTitle")
                .unwrap_or(defaults.popular_courses.section_title),
            show_count: field(row, "popularCoursesShowCount")
                .parse()
                .unwrap_or(defaults.popular_courses.show_count),
            view_all_button: non_empty(row, "popularCoursesViewAllButton")
                .unwrap_or(defaults.popular_courses.view_all_button),
        },
        impact: crate::domain::model::ImpactSection {
            section_title: non_empty(row, "impactSectionTitle")
                .unwrap_or(defaults.impact.section_title),
            show_section: parse_flag(row, "impactShowSection", defaults.impact.show_section),
        },
    })
}

pub fn home_page_to_rows(content: &HomePageContent) -> Vec<Vec<Value>> {
    let default_block = FeatureBlock::default();
    let block = |n: usize| content.feature_blocks.get(n).unwrap_or(&default_block);
    vec![vec![
        json!(content.hero.title),
        json!(content.hero.subtitle),
        json!(content.hero.primary_button),
        json!(content.hero.secondary_button),
        json!(content.features_section_title),
        json!(block(0).icon),
        json!(block(0).title),
        json!(block(0).description),
        json!(block(1).icon),
        json!(block(1).title),
        json!(block(1).description),
        json!(block(2).icon),
        json!(block(2).title),
        json!(block(2).description),
        json!(content.popular_courses.section_title),
        json!(content.popular_courses.show_count),
        json!(content.popular_courses.view_all_button),
        json!(content.impact.section_title),
        json!(content.impact.show_section),
    ]]
}

pub fn footer_contact_from_rows(rows: &[Row]) -> Option<FooterContactInfo> {
    let row = rows.first()?;
    Some(FooterContactInfo {
        email: field(row, "email"),
        phone: field(row, "phone"),
        address: field(row, "address"),
        company_name: field(row, "companyName"),
        tagline: field(row, "tagline"),
        stay_updated_title: field(row, "stayUpdatedTitle"),
        stay_updated_description: field(row, "stayUpdatedDescription"),
        website_name: field(row, "websiteName"),
        website_title: field(row, "websiteTitle"),
        welcome_message: field(row, "welcomeMessage"),
        copyright_text: field(row, "copyrightText"),
    })
}

pub fn footer_contact_to_rows(info: &FooterContactInfo) -> Vec<Vec<Value>> {
    vec![vec![
        json!(info.email),
        json!(info.phone),
        json!(info.address),
        json!(info.company_name),
        json!(info.tagline),
        json!(info.stay_updated_title),
        json!(info.stay_updated_description),
        json!(info.website_name),
        json!(info.website_title),
        json!(info.welcome_message),
        json!(info.copyright_text),
    ]]
}

pub fn social_links_from_rows(rows: &[Row]) -> Option<SocialMediaLinks> {
    let row = rows.first()?;
    Some(SocialMediaLinks {
        facebook: non_empty(row, "facebook"),
        twitter: non_empty(row, "twitter"),
        instagram: non_empty(row, "instagram"),
        linkedin: non_empty(row, "linkedin"),
        youtube: non_empty(row, "youtube"),
        whatsapp: non_empty(row, "whatsapp"),
    })
}

pub fn social_links_to_rows(links: &SocialMediaLinks) -> Vec<Vec<Value>> {
    let cell = |v: &Option<String>| json!(v.clone().unwrap_or_default());
    vec![vec![
        cell(&links.facebook),
        cell(&links.twitter),
        cell(&links.instagram),
        cell(&links.linkedin),
        cell(&links.youtube),
        cell(&links.whatsapp),
    ]]
}
