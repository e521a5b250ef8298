use std::fmt;
use crate::models::Notification;
use crate::state_management::AppState;

/// Admin screen: the notification feed, most recent first
#[derive(Debug, Clone)]
pub struct AdminView {
    pub notifications: Vec<Notification>,
}

impl AdminView {
    pub fn build(state: &AppState) -> Self {
        Self {
            notifications: state.feed().iter().cloned().collect(),
        }
    }
}

impl fmt::Display for AdminView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== System Administration ==")?;
        writeln!(f, "Controls: clear-docks | clear-maintenance | clear-history | export")?;
        if self.notifications.is_empty() {
            return writeln!(f, "No notifications");
        }
        writeln!(f, "Recent notifications:")?;
        for notification in &self.notifications {
            writeln!(f, "  {}  {}", notification.time, notification.message)?;
        }
        Ok(())
    }
}
