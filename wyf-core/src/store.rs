use chrono::{NaiveDate, Utc};
use wyf_types::{FriendRecord, FriendSubmission};

use crate::prompt::Prompter;

/// In-memory ordered collection of friend records. Records stay in insertion
/// order; the recency-sorted view is derived at render time and never stored.
#[derive(Debug, Default)]
pub struct FriendStore {
    friends: Vec<FriendRecord>,
}

impl FriendStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new record with a freshly assigned id. No duplicate check;
    /// field validation happens upstream on the form path.
    pub fn add(&mut self, submission: FriendSubmission) -> i64 {
        let id = self.next_id();
        self.friends.push(submission.into_record(id));
        tracing::info!(id, "friend added");
        id
    }

    /// Replaces the record whose id matches. Unknown ids are silently
    /// ignored; callers that care can check `get` first.
    pub fn update(&mut self, record: FriendRecord) {
        if let Some(existing) = self.friends.iter_mut().find(|f| f.id == record.id) {
            *existing = record;
            tracing::info!(id = existing.id, "friend updated");
        }
    }

    /// Sets the matching record's last contact date to the caller's "today"
    /// (the presentation layer supplies its local date, keeping the store
    /// clock-free). Silent no-op on an unknown id.
    pub fn touch_contact_date(&mut self, id: i64, today: NaiveDate) {
        if let Some(friend) = self.friends.iter_mut().find(|f| f.id == id) {
            friend.last_contact_date = today;
            tracing::info!(id, "contact date touched");
        }
    }

    /// Removes the matching record, but only once the prompter confirms.
    /// Returns whether a record was actually removed.
    pub fn remove(&mut self, id: i64, prompter: &dyn Prompter) -> bool {
        if !prompter.confirm_remove() {
            return false;
        }
        let before = self.friends.len();
        self.friends.retain(|f| f.id != id);
        let removed = self.friends.len() < before;
        if removed {
            tracing::info!(id, "friend removed");
        }
        removed
    }

    pub fn get(&self, id: i64) -> Option<&FriendRecord> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn list(&self) -> &[FriendRecord] {
        &self.friends
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn max_id(&self) -> i64 {
        self.friends.iter().map(|f| f.id).max().unwrap_or(0)
    }

    /// Swaps in a reconciled record set wholesale. Used by the import path
    /// after reconciliation succeeds.
    pub fn replace_all(&mut self, records: Vec<FriendRecord>) {
        self.friends = records;
    }

    // Ids derive from the current timestamp like the original widget, but the
    // uniqueness invariant wins over timestamp fidelity: collide and we bump.
    fn next_id(&self) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while self.friends.iter().any(|f| f.id == id) {
            id += 1;
        }
        id
    }
}
