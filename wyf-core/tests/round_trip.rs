use chrono::{NaiveDate, Utc};
use wyf_core::{export_document, export_filename, is_importable, reconcile_import, Prompter};
use wyf_types::{ContactChannel, FriendRecord, ImportMode, ImportSummary};

struct NeverAsked;
impl Prompter for NeverAsked {
    fn confirm_remove(&self) -> bool {
        panic!("remove confirmation should not be requested during import");
    }
    fn choose_import_mode(&self) -> ImportMode {
        panic!("import into an empty store must not prompt");
    }
}

fn sample_records() -> Vec<FriendRecord> {
    vec![
        FriendRecord {
            id: 1700000000001,
            name: "Alice".to_string(),
            last_contact_date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            contact_channel: ContactChannel::Email,
            contact_value: "alice@example.com".to_string(),
        },
        FriendRecord {
            id: 1700000000002,
            name: "Bob".to_string(),
            last_contact_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            contact_channel: ContactChannel::Phone,
            contact_value: "+15551234567".to_string(),
        },
        FriendRecord {
            id: 1700000000003,
            name: "Carol".to_string(),
            last_contact_date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            contact_channel: ContactChannel::ChatHandle,
            contact_value: "carol#1234".to_string(),
        },
    ]
}

#[test]
fn test_export_then_import_is_lossless() {
    let records = sample_records();
    let now = Utc::now();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export_filename(now.date_naive()));

    let document = export_document(&records, now).unwrap();
    std::fs::write(&path, &document).unwrap();

    assert!(is_importable(&path, None));

    let payload = std::fs::read_to_string(&path).unwrap();
    let outcome = reconcile_import(&[], &payload, &NeverAsked).unwrap();

    assert_eq!(outcome.summary, ImportSummary::Loaded { count: 3 });
    assert_eq!(outcome.records, records);
}

#[test]
fn test_reimport_into_same_data_adds_nothing() {
    struct Merges;
    impl Prompter for Merges {
        fn confirm_remove(&self) -> bool {
            false
        }
        fn choose_import_mode(&self) -> ImportMode {
            ImportMode::Merge
        }
    }

    let records = sample_records();
    let document = export_document(&records, Utc::now()).unwrap();

    let outcome = reconcile_import(&records, &document, &Merges).unwrap();
    assert_eq!(outcome.summary, ImportSummary::Merged { added: 0 });
    assert_eq!(outcome.records, records);
}
