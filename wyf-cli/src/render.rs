use chrono::NaiveDate;
use wyf_core::{days_since, StalenessBucket};
use wyf_types::{ContactChannel, FriendRecord};

pub const EMPTY_STATE: &str = "No friends added yet. Use \"add\" to get started!";

/// Renders the friend list as terminal cards: most recently contacted first,
/// ties kept in insertion order. Pure function of the records plus today's
/// date, recomputed on every call.
pub fn render_cards(records: &[FriendRecord], today: NaiveDate) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let mut sorted: Vec<&FriendRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.last_contact_date.cmp(&a.last_contact_date));

    let mut out = String::new();
    for friend in sorted {
        out.push_str(&render_card(friend, today));
    }
    out
}

fn render_card(friend: &FriendRecord, today: NaiveDate) -> String {
    let days = days_since(friend.last_contact_date, today);
    let bucket = StalenessBucket::from_days(days);
    format!(
        "{} {}  [{}]\n    Last contact: {} ({} days ago, {})\n    Channel: {}\n    Contact: {}\n",
        bucket_glyph(bucket),
        friend.name,
        friend.id,
        friend.last_contact_date.format("%Y-%m-%d"),
        days,
        bucket.label(),
        friend.contact_channel.label(),
        contact_action(friend.contact_channel, &friend.contact_value),
    )
}

fn bucket_glyph(bucket: StalenessBucket) -> &'static str {
    match bucket {
        StalenessBucket::Recent => "*",
        StalenessBucket::Moderate => "~",
        StalenessBucket::Stale => "!",
    }
}

/// The actionable form of a contact value, mirroring the original card
/// links: dialable phone, mailto address, messenger URL (bare handles get
/// the m.me prefix), and chat handles as-is.
pub fn contact_action(channel: ContactChannel, value: &str) -> String {
    match channel {
        ContactChannel::Phone => format!("tel:{}", value),
        ContactChannel::Email => format!("mailto:{}", value),
        ContactChannel::SocialMessenger => {
            if value.starts_with("http") {
                value.to_string()
            } else {
                format!("https://m.me/{}", value)
            }
        }
        ContactChannel::ChatHandle => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, date: (i32, u32, u32)) -> FriendRecord {
        FriendRecord {
            id,
            name: name.to_string(),
            last_contact_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            contact_channel: ContactChannel::Phone,
            contact_value: "+15551234567".to_string(),
        }
    }

    #[test]
    fn test_empty_store_renders_empty_state() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert!(render_cards(&[], today).contains(EMPTY_STATE));
    }

    #[test]
    fn test_cards_sorted_most_recent_first() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let records = vec![
            record(1, "Old", (2026, 6, 1)),
            record(2, "New", (2026, 8, 23)),
            record(3, "Middle", (2026, 8, 1)),
        ];
        let rendered = render_cards(&records, today);

        let new_pos = rendered.find("New").unwrap();
        let middle_pos = rendered.find("Middle").unwrap();
        let old_pos = rendered.find("Old").unwrap();
        assert!(new_pos < middle_pos);
        assert!(middle_pos < old_pos);
    }

    #[test]
    fn test_date_ties_keep_insertion_order() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let records = vec![
            record(1, "First", (2026, 8, 1)),
            record(2, "Second", (2026, 8, 1)),
        ];
        let rendered = render_cards(&records, today);
        assert!(rendered.find("First").unwrap() < rendered.find("Second").unwrap());
    }

    #[test]
    fn test_card_shows_staleness() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let rendered = render_cards(&[record(1, "Alice", (2026, 8, 20))], today);
        assert!(rendered.contains("(4 days ago, recent)"));
    }

    #[test]
    fn test_contact_actions_per_channel() {
        assert_eq!(
            contact_action(ContactChannel::Phone, "+15551234567"),
            "tel:+15551234567"
        );
        assert_eq!(
            contact_action(ContactChannel::Email, "a@b.com"),
            "mailto:a@b.com"
        );
        assert_eq!(
            contact_action(ContactChannel::SocialMessenger, "alice"),
            "https://m.me/alice"
        );
        assert_eq!(
            contact_action(ContactChannel::SocialMessenger, "https://m.me/alice"),
            "https://m.me/alice"
        );
        assert_eq!(
            contact_action(ContactChannel::ChatHandle, "alice#1234"),
            "alice#1234"
        );
    }
}
