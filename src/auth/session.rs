//! # Operator Session

//! A session is just the authenticated operator plus the time of their last activity.
//! There is no hard expiry: the watchdog only decides when to show the inactivity prompt,
//! and the operator either continues or logs out.

use std::time::{Duration, Instant};
use tracing::info;
use crate::config::SessionSettings;
use crate::models::Operator;

#[derive(Debug, Clone)]
pub struct Session {
    operator: Operator,
    last_activity: Instant,
}

impl Session {
    pub fn new(operator: Operator) -> Self {
        Self { operator, last_activity: Instant::now() }
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_activity)
    }
}

/// What the watchdog wants the console to do after a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogStatus {
    NoSession,
    Active,
    /// The warning prompt has just become due
    ShowWarning,
    /// The warning is already on screen
    WarningShown,
}

/// Tracks the current session and the inactivity prompt.
#[derive(Debug)]
pub struct SessionWatchdog {
    session: Option<Session>,
    warning_after: Duration,
    warning_shown: bool,
}

impl SessionWatchdog {
    pub fn new(settings: &SessionSettings) -> Self {
        Self {
            session: None,
            warning_after: settings.timeout().saturating_sub(settings.warning_lead()),
            warning_shown: false,
        }
    }

    pub fn login(&mut self, operator: Operator) {
        self.session = Some(Session::new(operator));
        self.warning_shown = false;
    }

    pub fn logout(&mut self) -> Option<Operator> {
        self.warning_shown = false;
        let operator = self.session.take().map(|session| session.operator);
        if let Some(ref operator) = operator {
            info!("Operator {} logged out", operator);
        }
        operator
    }

    pub fn operator(&self) -> Option<&Operator> {
        self.session.as_ref().map(Session::operator)
    }

    pub fn is_warning_shown(&self) -> bool {
        self.warning_shown
    }

    /// Records operator activity.
    pub fn record_activity(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.touch();
        }
    }

    /// Dismisses the inactivity prompt and keeps the session going
    pub fn continue_session(&mut self) {
        self.warning_shown = false;
        self.record_activity();
    }

    pub fn check(&mut self, now: Instant) -> WatchdogStatus {
        let Some(session) = self.session.as_ref() else {
            return WatchdogStatus::NoSession;
        };
        if self.warning_shown {
            return WatchdogStatus::WarningShown;
        }
        if session.idle_for(now) > self.warning_after {
            self.warning_shown = true;
            return WatchdogStatus::ShowWarning;
        }
        WatchdogStatus::Active
    }
}
