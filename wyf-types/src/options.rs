use serde::{Deserialize, Serialize};

/// Presentation options for one widget instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub title: String,
    pub subtitle: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            title: "Friend Contact Manager".to_string(),
            subtitle: "Keep track of your friends and when you last contacted them".to_string(),
        }
    }
}
