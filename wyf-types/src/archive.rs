use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::friend::{ContactChannel, FriendRecord};

pub const FORMAT_VERSION: &str = "1.0";

/// The persisted document shape for export and import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsFile {
    pub records: Vec<FriendRecord>,
    pub export_date: DateTime<Utc>,
    pub format_version: String,
}

/// A record as it appears in an imported file. Older exports predate the
/// contact channel field, so it is optional here and inferred from the
/// contact value during reconciliation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingRecord {
    pub id: i64,
    pub name: String,
    pub last_contact_date: NaiveDate,
    #[serde(default)]
    pub contact_channel: Option<ContactChannel>,
    pub contact_value: String,
}

/// The caller's replace-or-merge decision when importing into a non-empty
/// store. Cancelling the prompt means merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    Replace,
    Merge,
}

/// User-facing outcome of a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSummary {
    /// The store was empty; the file's records were adopted verbatim.
    Loaded { count: usize },
    /// The existing records were discarded in favor of the file's.
    Replaced { count: usize },
    /// The file's records were merged in; `added` survived deduplication.
    Merged { added: usize },
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportSummary::Loaded { count } => {
                write!(f, "{} friends loaded", count)
            }
            ImportSummary::Replaced { count } => {
                write!(f, "Existing data replaced with {} friends", count)
            }
            ImportSummary::Merged { added: 0 } => {
                write!(
                    f,
                    "No new friends were added (all friends from the file already exist)"
                )
            }
            ImportSummary::Merged { added } => {
                write!(f, "{} new friends were added to your list", added)
            }
        }
    }
}
