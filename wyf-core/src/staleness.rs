use chrono::NaiveDate;

/// Derived recency classification for a friend card. Recomputed on every
/// render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StalenessBucket {
    Recent,
    Moderate,
    Stale,
}

impl StalenessBucket {
    pub fn from_days(days_since: i64) -> Self {
        if days_since <= 7 {
            StalenessBucket::Recent
        } else if days_since <= 30 {
            StalenessBucket::Moderate
        } else {
            StalenessBucket::Stale
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StalenessBucket::Recent => "recent",
            StalenessBucket::Moderate => "moderate",
            StalenessBucket::Stale => "stale",
        }
    }

    /// Status art carried over from the plant-watering theme.
    pub fn status_image(&self) -> &'static str {
        match self {
            StalenessBucket::Recent => "grown.svg",
            StalenessBucket::Moderate => "growing.svg",
            StalenessBucket::Stale => "sprout.svg",
        }
    }
}

/// Calendar days elapsed between the last contact date and today. Dates have
/// no time component, so this is a plain day difference; a future-dated last
/// contact comes out negative and lands in the recent bucket.
pub fn days_since(last_contact: NaiveDate, today: NaiveDate) -> i64 {
    (today - last_contact).num_days()
}
