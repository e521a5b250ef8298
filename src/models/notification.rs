use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::display_time;

/// A human-readable audit line produced as a side effect of an orchestrator operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Millisecond timestamp; only used to key the list.
    pub id: i64,
    pub time: String,
    pub message: String,
}

impl Notification {
    pub fn new(message: String, at: NaiveDateTime) -> Self {
        Self {
            id: at.and_utc().timestamp_millis(),
            time: display_time(at),
            message,
        }
    }
}
