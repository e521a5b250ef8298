use std::collections::VecDeque;
use chrono::NaiveDateTime;
use crate::models::Notification;

/// Most-recent-first list of audit notifications. Never capped or pruned.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: String, at: NaiveDateTime) {
        self.entries.push_front(Notification::new(message, at));
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }
}
