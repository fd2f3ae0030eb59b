use edusync::{Course, DomainKind, FileStore, HttpTransport, MemoryStore, SyncManager};
use httpmock::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

const COURSES_CSV: &str = "\
id,title,description,price,duration,level,category,imageUrl,instructor,rating,students,features
1,Web Dev,Learn the web,999,8 weeks,Beginner,tech,,Asha,4.5,120,HTML|CSS|JS
2,\"Data, Science\",Stats and more,1299,12 weeks,Advanced,tech,,Ravi,4.8,80,Python|Pandas";

fn sheet_url(server: &MockServer) -> String {
    server.url("/spreadsheets/d/abc123/edit?usp=sharing")
}

fn manager(store: Arc<MemoryStore>) -> SyncManager<MemoryStore> {
    let transport = Arc::new(HttpTransport::with_default_timeout().unwrap());
    SyncManager::new(store, transport)
}

fn enable(manager: &SyncManager<MemoryStore>, server: &MockServer, kind: DomainKind) {
    manager.settings().set_sync_enabled(true).unwrap();
    manager.settings().set_sheet_url(kind, &sheet_url(server)).unwrap();
}

#[tokio::test]
async fn test_live_sync_refreshes_cache_from_csv_export() {
    let server = MockServer::start();
    let export_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/spreadsheets/d/abc123/export")
            .query_param("format", "csv")
            .query_param("gid", "0");
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(COURSES_CSV);
    });

    let m = manager(Arc::new(MemoryStore::new()));
    enable(&m, &server, DomainKind::Courses);

    let courses = m.sync_courses().await;

    export_mock.assert();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].price, "999");
    assert_eq!(courses[1].title, "Data, Science");
    assert_eq!(courses[1].features, vec!["Python", "Pandas"]);
    assert_eq!(m.cache().courses(), courses);
}

#[tokio::test]
async fn test_server_error_serves_last_good_cache() {
    let server = MockServer::start();
    let export_mock = server.mock(|when, then| {
        when.method(GET).path("/spreadsheets/d/abc123/export");
        then.status(500);
    });

    let m = manager(Arc::new(MemoryStore::new()));
    enable(&m, &server, DomainKind::Courses);

    let cached = Course {
        id: "cached".to_string(),
        title: "Cached Course".to_string(),
        ..Course::default()
    };
    m.cache().set_courses(&[cached.clone()]).unwrap();

    let served = m.sync_courses().await;

    export_mock.assert();
    assert_eq!(served, vec![cached.clone()]);
    assert_eq!(m.cache().courses(), vec![cached]);
}

#[tokio::test]
async fn test_malformed_rows_are_dropped_not_fatal() {
    let csv = "id,title,description,price,duration,level,category,imageUrl,instructor,rating,students,features\n\
               1,Ok Course,,49,,,,,,0,0,\n\
               2,short-row\n\
               3,Another,,99,,,,,,0,0,";
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/spreadsheets/d/abc123/export");
        then.status(200).body(csv);
    });

    let m = manager(Arc::new(MemoryStore::new()));
    enable(&m, &server, DomainKind::Courses);

    let courses = m.sync_courses().await;

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id, "1");
    assert_eq!(courses[1].id, "3");
}

#[tokio::test]
async fn test_sync_all_isolates_domain_failures() {
    let server = MockServer::start();
    // Only the courses export is served; every other domain's fetch 404s.
    server.mock(|when, then| {
        when.method(GET).path("/spreadsheets/d/abc123/export");
        then.status(200).body("id,title,description,price,duration,level,category,imageUrl,instructor,rating,students,features\n9,Solo,,0,,,,,,0,0,");
    });
    let failing = MockServer::start();

    let m = manager(Arc::new(MemoryStore::new()));
    m.settings().set_sync_enabled(true).unwrap();
    m.settings()
        .set_sheet_url(DomainKind::Courses, &sheet_url(&server))
        .unwrap();
    for kind in [
        DomainKind::TeamMembers,
        DomainKind::GalleryItems,
        DomainKind::HomePageContent,
        DomainKind::FooterContactInfo,
        DomainKind::SocialMediaLinks,
    ] {
        m.settings()
            .set_sheet_url(kind, &failing.url("/spreadsheets/d/zzz/edit"))
            .unwrap();
    }

    let outcomes = m.sync_all().await;

    assert_eq!(outcomes.len(), 6);
    for outcome in &outcomes {
        if outcome.domain == DomainKind::Courses {
            assert!(outcome.refreshed);
            assert_eq!(outcome.records, 1);
        } else {
            assert!(!outcome.refreshed);
            assert_eq!(outcome.records, 0);
        }
    }
    assert_eq!(m.cache().courses()[0].id, "9");
}

#[tokio::test]
async fn test_singleton_sync_with_zero_rows_keeps_cache() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/spreadsheets/d/abc123/export");
        then.status(200)
            .body("email,phone,address,companyName,tagline,stayUpdatedTitle,stayUpdatedDescription,websiteName,websiteTitle,welcomeMessage,copyrightText\n");
    });

    let m = manager(Arc::new(MemoryStore::new()));
    enable(&m, &server, DomainKind::FooterContactInfo);

    assert!(m.sync_footer_contact_info().await.is_none());
    assert!(m.cache().footer_contact_info().is_none());
}

#[tokio::test]
async fn test_synced_content_survives_store_reopen() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/spreadsheets/d/abc123/export");
        then.status(200).body(COURSES_CSV);
    });

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let transport = Arc::new(HttpTransport::with_default_timeout().unwrap());
        let m = SyncManager::new(store, transport);
        m.settings().set_sync_enabled(true).unwrap();
        m.settings()
            .set_sheet_url(DomainKind::Courses, &sheet_url(&server))
            .unwrap();
        assert_eq!(m.sync_courses().await.len(), 2);
    }

    let reopened = Arc::new(FileStore::open(&path).unwrap());
    let transport = Arc::new(HttpTransport::with_default_timeout().unwrap());
    let m = SyncManager::new(reopened, transport);
    let courses = m.cache().courses();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].title, "Web Dev");
    assert!(m.cache().last_synced(DomainKind::Courses).is_some());
}
