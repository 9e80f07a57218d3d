use regex::Regex;
use std::sync::OnceLock;
use wyf_types::{ContactChannel, FriendSubmission, WidgetError};

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    // Optional leading +, first digit 1-9, at least 7 digits total.
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?[1-9]\d{6,15}$").expect("phone pattern"))
}

fn email_re() -> &'static Regex {
    // local@domain.tld shape: no whitespace, one @, a dot after it.
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

/// Full form-path check: required fields plus the per-channel format rule.
/// Imported records never pass through here.
pub fn validate_submission(submission: &FriendSubmission) -> Result<(), WidgetError> {
    if submission.name.trim().is_empty() {
        return Err(WidgetError::Validation("name must not be empty".to_string()));
    }
    if submission.contact_value.trim().is_empty() {
        return Err(WidgetError::Validation(
            "contact value must not be empty".to_string(),
        ));
    }
    validate_contact(submission.contact_channel, &submission.contact_value)
}

/// Per-channel contact format rule. All-or-nothing: any failure blocks the
/// whole submission.
pub fn validate_contact(channel: ContactChannel, value: &str) -> Result<(), WidgetError> {
    match channel {
        ContactChannel::Phone => {
            let cleaned: String = value
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
                .collect();
            let digits = cleaned.chars().filter(|c| c.is_ascii_digit()).count();
            if phone_re().is_match(&cleaned) || digits >= 7 {
                Ok(())
            } else {
                Err(WidgetError::Validation(
                    "please enter a valid phone number".to_string(),
                ))
            }
        }
        ContactChannel::Email => {
            if email_re().is_match(value) {
                Ok(())
            } else {
                Err(WidgetError::Validation(
                    "please enter a valid email address".to_string(),
                ))
            }
        }
        ContactChannel::SocialMessenger => {
            // Length is in characters, not bytes; multibyte handles count
            // one per character.
            if value.contains("facebook.com")
                || value.contains("m.me")
                || value.chars().count() >= 3
            {
                Ok(())
            } else {
                Err(WidgetError::Validation(
                    "please enter a valid messenger URL or username".to_string(),
                ))
            }
        }
        ContactChannel::ChatHandle => {
            if value.chars().count() >= 3 {
                Ok(())
            } else {
                Err(WidgetError::Validation(
                    "please enter a valid chat username or ID".to_string(),
                ))
            }
        }
    }
}
