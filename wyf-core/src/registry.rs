use std::collections::HashMap;
use wyf_types::WidgetOptions;

use crate::store::FriendStore;

/// One widget instance: a store plus its presentation options.
#[derive(Debug, Default)]
pub struct FriendWidget {
    pub options: WidgetOptions,
    pub store: FriendStore,
}

impl FriendWidget {
    pub fn new(options: WidgetOptions) -> Self {
        Self {
            options,
            store: FriendStore::new(),
        }
    }
}

/// Owns named widget instances keyed by container id. Replaces the old
/// page-global widget map; callers hold the registry explicitly instead.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: HashMap<String, FriendWidget>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a widget under `container_id`, replacing any previous one
    /// registered with the same id.
    pub fn create(&mut self, container_id: &str, options: WidgetOptions) -> &mut FriendWidget {
        self.widgets
            .insert(container_id.to_string(), FriendWidget::new(options));
        self.widgets.get_mut(container_id).unwrap()
    }

    pub fn get(&self, container_id: &str) -> Option<&FriendWidget> {
        self.widgets.get(container_id)
    }

    pub fn get_mut(&mut self, container_id: &str) -> Option<&mut FriendWidget> {
        self.widgets.get_mut(container_id)
    }

    pub fn remove(&mut self, container_id: &str) -> Option<FriendWidget> {
        self.widgets.remove(container_id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wyf_types::{ContactChannel, FriendSubmission};

    fn submission(name: &str) -> FriendSubmission {
        FriendSubmission {
            name: name.to_string(),
            last_contact_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            contact_channel: ContactChannel::ChatHandle,
            contact_value: "handle#1".to_string(),
        }
    }

    #[test]
    fn test_instances_are_independent() {
        let mut registry = WidgetRegistry::new();
        registry.create("sidebar", WidgetOptions::default());
        registry.create("main", WidgetOptions::default());

        registry
            .get_mut("sidebar")
            .unwrap()
            .store
            .add(submission("Alice"));

        assert_eq!(registry.get("sidebar").unwrap().store.len(), 1);
        assert!(registry.get("main").unwrap().store.is_empty());
    }

    #[test]
    fn test_create_replaces_existing_instance() {
        let mut registry = WidgetRegistry::new();
        registry
            .create("main", WidgetOptions::default())
            .store
            .add(submission("Alice"));

        registry.create("main", WidgetOptions::default());
        assert!(registry.get("main").unwrap().store.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_container_is_none() {
        let registry = WidgetRegistry::new();
        assert!(registry.get("nowhere").is_none());
    }
}
