// Account creation date formatting.

use chrono::NaiveDateTime;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Render `2011-01-25T18:44:36Z` as `Tue, 25 Jan 2011 18:44:36 GMT`.
///
/// Blank or unrecognized input comes back unchanged.
pub fn format_created_at(raw: &str) -> String {
    if raw.trim().is_empty() {
        return raw.to_string();
    }

    match NaiveDateTime::parse_from_str(raw, ISO_FORMAT) {
        Ok(instant) => instant.and_utc().format(HTTP_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
