use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;
use wyf_types::{FriendRecord, FriendsFile, WidgetError, FORMAT_VERSION};

/// Builds the pretty-printed export document. Record order and ids are
/// preserved exactly, so an export followed by an import into an empty store
/// round-trips field-for-field.
pub fn export_document(
    records: &[FriendRecord],
    export_date: DateTime<Utc>,
) -> Result<String, WidgetError> {
    let file = FriendsFile {
        records: records.to_vec(),
        export_date,
        format_version: FORMAT_VERSION.to_string(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// `friends-data-YYYY-MM-DD.json`, dated with the export date.
pub fn export_filename(export_date: NaiveDate) -> String {
    format!("friends-data-{}.json", export_date.format("%Y-%m-%d"))
}

/// Import gate: only `.json` files or an `application/json` MIME type are
/// accepted. Anything else is rejected before any read happens.
pub fn is_importable(path: &Path, mime_type: Option<&str>) -> bool {
    if mime_type == Some("application/json") {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
