use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a friend prefers to be reached. The wire names are camelCase to stay
/// compatible with previously exported data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactChannel {
    Phone,
    Email,
    SocialMessenger,
    ChatHandle,
}

impl ContactChannel {
    /// Human-facing label for cards and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ContactChannel::Phone => "Phone",
            ContactChannel::Email => "Email",
            ContactChannel::SocialMessenger => "Messenger",
            ContactChannel::ChatHandle => "Chat handle",
        }
    }

    /// Parses a user-entered channel name. Accepts both the wire name and
    /// the lowercased label.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "phone" => Some(ContactChannel::Phone),
            "email" => Some(ContactChannel::Email),
            "socialmessenger" | "messenger" | "social" => Some(ContactChannel::SocialMessenger),
            "chathandle" | "chat" => Some(ContactChannel::ChatHandle),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One tracked friend with contact metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRecord {
    pub id: i64,
    pub name: String,
    pub last_contact_date: NaiveDate,
    pub contact_channel: ContactChannel,
    pub contact_value: String,
}

/// Form-path payload for creating or editing a friend. The store assigns the
/// id on add; edits carry the id of the record being replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct FriendSubmission {
    pub name: String,
    pub last_contact_date: NaiveDate,
    pub contact_channel: ContactChannel,
    pub contact_value: String,
}

impl FriendSubmission {
    pub fn into_record(self, id: i64) -> FriendRecord {
        FriendRecord {
            id,
            name: self.name,
            last_contact_date: self.last_contact_date,
            contact_channel: self.contact_channel,
            contact_value: self.contact_value,
        }
    }
}
