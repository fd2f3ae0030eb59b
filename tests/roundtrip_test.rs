//! Write-then-read round trips through the documented CSV schema: rows
//! formatted for the endpoint, rendered as a CSV export, parsed, and
//! mapped back should reproduce the records modulo documented coercions.

use edusync::core::mapping;
use edusync::core::reader::parse_csv;
use edusync::domain::model::{
    Course, FeatureBlock, FooterContactInfo, GalleryCategory, GalleryItem, HeroContent,
    HomePageContent, ImpactSection, PopularCoursesSection, SocialMediaLinks, TeamMember,
};
use edusync::DomainKind;
use serde_json::Value;

fn cell_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Renders formatted rows the way the spreadsheet's CSV export would.
fn csv_text(kind: DomainKind, rows: &[Vec<Value>]) -> String {
    let mut lines = vec![mapping::headers(kind).join(",")];
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|v| quote(&cell_to_string(v)))
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

#[test]
fn test_courses_roundtrip() {
    let original = vec![
        Course {
            id: "1".to_string(),
            title: "Intro, to Web".to_string(),
            description: "From \"zero\" to hero".to_string(),
            price: "999".to_string(),
            duration: "8 weeks".to_string(),
            level: "Beginner".to_string(),
            category: "tech".to_string(),
            image_url: "https://img.example.com/web.png".to_string(),
            instructor: "Asha".to_string(),
            rating: 4.5,
            students: 120,
            features: vec!["HTML".to_string(), "CSS".to_string(), "JS".to_string()],
        },
        Course {
            id: "2".to_string(),
            title: "Data Science".to_string(),
            price: "1299".to_string(),
            ..Course::default()
        },
    ];

    let rows = mapping::courses_to_rows(&original);
    let parsed = parse_csv(&csv_text(DomainKind::Courses, &rows)).unwrap();
    assert_eq!(parsed.skipped, 0);

    let roundtripped = mapping::courses_from_rows(&parsed.rows);
    assert_eq!(roundtripped, original);
}

#[test]
fn test_team_members_roundtrip() {
    let original = vec![TeamMember {
        id: "t1".to_string(),
        name: "Priya Nair".to_string(),
        position: "Principal".to_string(),
        description: "Leads the school".to_string(),
        image_url: "https://img.example.com/p.png".to_string(),
        email: "priya@school.example".to_string(),
        linkedin: "https://linkedin.com/in/priya".to_string(),
    }];

    let rows = mapping::team_members_to_rows(&original);
    let parsed = parse_csv(&csv_text(DomainKind::TeamMembers, &rows)).unwrap();
    assert_eq!(mapping::team_members_from_rows(&parsed.rows), original);
}

#[test]
fn test_gallery_items_roundtrip() {
    let original = vec![GalleryItem {
        id: "g1".to_string(),
        title: "Annual Day".to_string(),
        description: "Students on stage".to_string(),
        category: GalleryCategory::Students,
        image_url: "https://img.example.com/g.png".to_string(),
    }];

    let rows = mapping::gallery_items_to_rows(&original);
    let parsed = parse_csv(&csv_text(DomainKind::GalleryItems, &rows)).unwrap();
    assert_eq!(mapping::gallery_items_from_rows(&parsed.rows), original);
}

#[test]
fn test_home_page_content_roundtrip() {
    let original = HomePageContent {
        hero: HeroContent {
            title: "Welcome".to_string(),
            subtitle: "Learn, with us".to_string(),
            primary_button: "Start".to_string(),
            secondary_button: "Ask".to_string(),
        },
        features_section_title: "Why choose us".to_string(),
        feature_blocks: vec![
            FeatureBlock {
                icon: "star".to_string(),
                title: "Mentors".to_string(),
                description: "Real teachers".to_string(),
            },
            FeatureBlock {
                icon: "clock".to_string(),
                title: "Flexible".to_string(),
                description: "Any time".to_string(),
            },
            FeatureBlock {
                icon: "badge".to_string(),
                title: "Certified".to_string(),
                description: "Recognized".to_string(),
            },
        ],
        popular_courses: PopularCoursesSection {
            section_title: "Top picks".to_string(),
            show_count: 4,
            view_all_button: "See all".to_string(),
        },
        impact: ImpactSection {
            section_title: "Impact".to_string(),
            show_section: false,
        },
    };

    let rows = mapping::home_page_to_rows(&original);
    let parsed = parse_csv(&csv_text(DomainKind::HomePageContent, &rows)).unwrap();
    let roundtripped = mapping::home_page_from_rows(&parsed.rows).unwrap();
    assert_eq!(roundtripped, original);
}

#[test]
fn test_footer_contact_info_roundtrip() {
    let original = FooterContactInfo {
        email: "hello@school.example".to_string(),
        phone: "+91 98765 43210".to_string(),
        address: "12, Lake Road, Kochi".to_string(),
        company_name: "Bright Academy".to_string(),
        tagline: "Learning for life".to_string(),
        stay_updated_title: "Stay updated".to_string(),
        stay_updated_description: "News every month".to_string(),
        website_name: "brightacademy".to_string(),
        website_title: "Bright Academy".to_string(),
        welcome_message: "Welcome!".to_string(),
        copyright_text: "© 2025 Bright Academy".to_string(),
    };

    let rows = mapping::footer_contact_to_rows(&original);
    let parsed = parse_csv(&csv_text(DomainKind::FooterContactInfo, &rows)).unwrap();
    assert_eq!(
        mapping::footer_contact_from_rows(&parsed.rows),
        Some(original)
    );
}

#[test]
fn test_social_links_roundtrip_with_absent_fields() {
    let original = SocialMediaLinks {
        facebook: Some("https://facebook.com/school".to_string()),
        twitter: None,
        instagram: Some("https://instagram.com/school".to_string()),
        linkedin: None,
        youtube: None,
        whatsapp: Some("https://wa.me/919876543210".to_string()),
    };

    let rows = mapping::social_links_to_rows(&original);
    let parsed = parse_csv(&csv_text(DomainKind::SocialMediaLinks, &rows)).unwrap();
    assert_eq!(mapping::social_links_from_rows(&parsed.rows), Some(original));
}

#[test]
fn test_writer_column_order_matches_reader_headers() {
    for kind in DomainKind::ALL {
        let width = match kind {
            DomainKind::Courses => mapping::courses_to_rows(&[Course::default()])[0].len(),
            DomainKind::TeamMembers => {
                mapping::team_members_to_rows(&[TeamMember::default()])[0].len()
            }
            DomainKind::GalleryItems => {
                mapping::gallery_items_to_rows(&[GalleryItem::default()])[0].len()
            }
            DomainKind::HomePageContent => {
                mapping::home_page_to_rows(&HomePageContent::default())[0].len()
            }
            DomainKind::FooterContactInfo => {
                mapping::footer_contact_to_rows(&FooterContactInfo::default())[0].len()
            }
            DomainKind::SocialMediaLinks => {
                mapping::social_links_to_rows(&SocialMediaLinks::default())[0].len()
            }
        };
        assert_eq!(width, mapping::headers(kind).len(), "width mismatch for {}", kind);
    }
}
