use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/spreadsheets/d/([a-zA-Z0-9-_]+)").unwrap())
}

/// Extracts the spreadsheet id from a share URL. The read and write paths
/// both go through this function, so they always agree on the target sheet.
pub fn extract_spreadsheet_id(share_url: &str) -> Option<String> {
    id_pattern()
        .captures(share_url.trim())
        .map(|caps| caps[1].to_string())
}

/// Turns a share URL into its CSV export URL, or `None` when the URL is
/// absent or does not look like a spreadsheet link. `None` means "fall back
/// to cache", never an error.
///
/// The export URL keeps the share URL's origin rather than assuming a fixed
/// host; real share links resolve to the same origin they came from, and
/// tests can serve the export from a local mock.
pub fn resolve_export_url(share_url: &str, sheet_index: u32) -> Option<String> {
    let share_url = share_url.trim();
    if share_url.is_empty() {
        return None;
    }
    let id = extract_spreadsheet_id(share_url)?;
    let parsed = Url::parse(share_url).ok()?;
    let host = parsed.host_str()?;
    let origin = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };
    Some(format!(
        "{}/spreadsheets/d/{}/export?format=csv&gid={}",
        origin, id, sheet_index
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_spreadsheet_id() {
        let url = "https://docs.google.com/spreadsheets/d/1AbC-dEf_123/edit#gid=0";
        assert_eq!(extract_spreadsheet_id(url).as_deref(), Some("1AbC-dEf_123"));

        assert_eq!(extract_spreadsheet_id("https://example.com/other"), None);
        assert_eq!(extract_spreadsheet_id(""), None);
    }

    #[test]
    fn test_resolve_export_url_default_sheet() {
        let url = "https://docs.google.com/spreadsheets/d/abc123/edit?usp=sharing";
        assert_eq!(
            resolve_export_url(url, 0).as_deref(),
            Some("https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=0")
        );
    }

    #[test]
    fn test_resolve_export_url_keeps_origin_and_gid() {
        let url = "http://127.0.0.1:5000/spreadsheets/d/abc123/edit";
        assert_eq!(
            resolve_export_url(url, 2).as_deref(),
            Some("http://127.0.0.1:5000/spreadsheets/d/abc123/export?format=csv&gid=2")
        );
    }

    #[test]
    fn test_resolve_export_url_malformed_is_none() {
        assert_eq!(resolve_export_url("", 0), None);
        assert_eq!(resolve_export_url("not a url", 0), None);
        assert_eq!(resolve_export_url("https://example.com/sheets", 0), None);
    }
}
