use serde_json::Value;
use wyf_types::{
    ContactChannel, FriendRecord, ImportMode, ImportSummary, IncomingRecord, WidgetError,
};

use crate::prompt::Prompter;

/// Result of reconciling an imported file against the current records. The
/// caller swaps `records` into the store; nothing here mutates anything, so a
/// failed import leaves the store untouched.
#[derive(Debug)]
pub struct ImportOutcome {
    pub records: Vec<FriendRecord>,
    pub summary: ImportSummary,
}

/// Reconciles a raw JSON payload against the current record set.
///
/// The payload must be a JSON document with a top-level `records` array;
/// anything else is a format error. When the current set is non-empty the
/// prompter decides replace-vs-merge before anything else happens. Merge
/// drops incoming records whose name already exists (case-insensitive) and
/// renumbers the survivors past the current max id, in file order.
pub fn reconcile_import(
    current: &[FriendRecord],
    payload: &str,
    prompter: &dyn Prompter,
) -> Result<ImportOutcome, WidgetError> {
    let document: Value = serde_json::from_str(payload).map_err(|e| {
        tracing::warn!(error = %e, "import rejected: unparsable payload");
        WidgetError::Parse(e)
    })?;

    let records_value = document.get("records").ok_or_else(|| {
        tracing::warn!("import rejected: missing 'records' field");
        WidgetError::Format("missing 'records' field".to_string())
    })?;
    if !records_value.is_array() {
        tracing::warn!("import rejected: 'records' is not an array");
        return Err(WidgetError::Format("'records' is not an array".to_string()));
    }

    let incoming: Vec<IncomingRecord> = serde_json::from_value(records_value.clone())
        .map_err(|e| {
            tracing::warn!(error = %e, "import rejected: bad record");
            WidgetError::Format(format!("bad record in 'records': {}", e))
        })?;

    let incoming: Vec<FriendRecord> = incoming.into_iter().map(resolve_channel).collect();

    if current.is_empty() {
        let count = incoming.len();
        tracing::info!(count, "import into empty store");
        return Ok(ImportOutcome {
            records: incoming,
            summary: ImportSummary::Loaded { count },
        });
    }

    match prompter.choose_import_mode() {
        ImportMode::Replace => {
            let count = incoming.len();
            tracing::info!(count, discarded = current.len(), "import replaced store");
            Ok(ImportOutcome {
                records: incoming,
                summary: ImportSummary::Replaced { count },
            })
        }
        ImportMode::Merge => {
            let existing_names: std::collections::HashSet<String> =
                current.iter().map(|f| f.name.to_lowercase()).collect();

            let max_id = current.iter().map(|f| f.id).max().unwrap_or(0);

            let mut records = current.to_vec();
            let mut added = 0usize;
            for mut friend in incoming {
                if existing_names.contains(&friend.name.to_lowercase()) {
                    continue;
                }
                friend.id = max_id + added as i64 + 1;
                records.push(friend);
                added += 1;
            }

            tracing::info!(added, "import merged into store");
            Ok(ImportOutcome {
                records,
                summary: ImportSummary::Merged { added },
            })
        }
    }
}

fn resolve_channel(incoming: IncomingRecord) -> FriendRecord {
    let channel = incoming
        .contact_channel
        .unwrap_or_else(|| infer_channel(&incoming.contact_value));
    FriendRecord {
        id: incoming.id,
        name: incoming.name,
        last_contact_date: incoming.last_contact_date,
        contact_channel: channel,
        contact_value: incoming.contact_value,
    }
}

/// Best-effort channel guess for legacy records that predate the channel
/// field. The check order (email, then messenger, then phone) is load-bearing
/// for compatibility with old exports and must not be reordered.
pub fn infer_channel(contact_value: &str) -> ContactChannel {
    if contact_value.contains('@') {
        ContactChannel::Email
    } else if contact_value.contains("http")
        || contact_value.contains("facebook.com")
        || contact_value.contains("m.me")
    {
        ContactChannel::SocialMessenger
    } else {
        ContactChannel::Phone
    }
}
