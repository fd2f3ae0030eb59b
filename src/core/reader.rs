use crate::core::mapping::{self, Row};
use crate::domain::model::{
    Course, FooterContactInfo, GalleryItem, HomePageContent, SocialMediaLinks, TeamMember,
};
use crate::domain::ports::SheetTransport;
use crate::utils::error::Result;
use std::sync::Arc;

/// Result of parsing one CSV export: header-keyed data rows plus the number
/// of malformed rows that were dropped on the way.
#[derive(Debug, Default)]
pub struct RowSet {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub skipped: usize,
}

/// Parses CSV export text. The first line is the header row; header cells
/// are trimmed and stripped of surrounding quotes. A data row whose field
/// count does not match the header count is dropped, not partially
/// accepted, and counted in `skipped`.
pub fn parse_csv(text: &str) -> Result<RowSet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().trim_matches('"').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                skipped += 1;
                tracing::warn!("Dropping unparseable CSV row: {}", e);
                continue;
            }
        };
        if record.len() != headers.len() {
            skipped += 1;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            tracing::warn!(
                "Dropping CSV row at line {}: {} fields, expected {}",
                line,
                record.len(),
                headers.len()
            );
            continue;
        }
        let row: Row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|cell| cell.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(RowSet {
        headers,
        rows,
        skipped,
    })
}

/// Read path of the sync layer: fetches a CSV export through the transport
/// and maps rows into typed records.
pub struct SheetReader {
    transport: Arc<dyn SheetTransport>,
}

impl SheetReader {
    pub fn new(transport: Arc<dyn SheetTransport>) -> Self {
        Self { transport }
    }

    pub async fn fetch_rows(&self, export_url: &str) -> Result<RowSet> {
        let text = self.transport.fetch_csv(export_url).await?;
        let set = parse_csv(&text)?;
        if set.skipped > 0 {
            tracing::warn!(
                "CSV export at {} had {} malformed row(s) dropped",
                export_url,
                set.skipped
            );
        }
        tracing::debug!("Fetched {} data row(s) from {}", set.rows.len(), export_url);
        Ok(set)
    }

    pub async fn fetch_courses(&self, export_url: &str) -> Result<Vec<Course>> {
        let set = self.fetch_rows(export_url).await?;
        Ok(mapping::courses_from_rows(&set.rows))
    }

    pub async fn fetch_team_members(&self, export_url: &str) -> Result<Vec<TeamMember>> {
        let set = self.fetch_rows(export_url).await?;
        Ok(mapping::team_members_from_rows(&set.rows))
    }

    pub async fn fetch_gallery_items(&self, export_url: &str) -> Result<Vec<GalleryItem>> {
        let set = self.fetch_rows(export_url).await?;
        Ok(mapping::gallery_items_from_rows(&set.rows))
    }

    pub async fn fetch_home_page_content(
        &self,
        export_url: &str,
    ) -> Result<Option<HomePageContent>> {
        let set = self.fetch_rows(export_url).await?;
        Ok(mapping::home_page_from_rows(&set.rows))
    }

    pub async fn fetch_footer_contact_info(
        &self,
        export_url: &str,
    ) -> Result<Option<FooterContactInfo>> {
        let set = self.fetch_rows(export_url).await?;
        Ok(mapping::footer_contact_from_rows(&set.rows))
    }

    pub async fn fetch_social_links(&self, export_url: &str) -> Result<Option<SocialMediaLinks>> {
        let set = self.fetch_rows(export_url).await?;
        Ok(mapping::social_links_from_rows(&set.rows))
    }
}
