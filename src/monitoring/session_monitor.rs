use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};
use crate::auth::{SessionWatchdog, WatchdogStatus};
use crate::config::SessionSettings;

/// The prompt shown when the session is `warning_lead` away from timing out
pub fn inactivity_prompt(warning_lead: Duration) -> String {
    let secs = warning_lead.as_secs();
    let remaining = match (secs / 60, secs % 60) {
        (1, 0) => "1 minute".to_string(),
        (minutes, 0) if minutes > 0 => format!("{} minutes", minutes),
        _ if secs == 1 => "1 second".to_string(),
        _ => format!("{} seconds", secs),
    };
    format!(
        "Your session will expire in {} due to inactivity. Type 'continue' to stay logged in or 'logout'.",
        remaining
    )
}

/// Periodically checks the operator session and raises the inactivity prompt.
///
/// The monitor never ends a session by itself; it only tells the console to show the prompt.
#[derive(Clone)]
pub struct SessionMonitor {
    watchdog: Arc<Mutex<SessionWatchdog>>,
    check_interval: Duration,
    prompt: String,
    prompt_sender: mpsc::Sender<String>,
}

impl SessionMonitor {
    /// Creates a new SessionMonitor
    ///
    /// # Arguments
    ///
    /// * `watchdog` - The session watchdog shared with the console controller
    /// * `settings` - Check interval and warning lead of the session
    /// * `prompt_sender` - Where prompts for the console are sent
    pub fn new(
        watchdog: Arc<Mutex<SessionWatchdog>>,
        settings: &SessionSettings,
        prompt_sender: mpsc::Sender<String>,
    ) -> Self {
        Self {
            watchdog,
            check_interval: settings.check_interval(),
            prompt: inactivity_prompt(settings.warning_lead()),
            prompt_sender,
        }
    }

    /// Runs until the console stops listening for prompts
    pub async fn run(&self) {
        let mut interval = interval(self.check_interval);
        loop {
            interval.tick().await;
            if !self.check_once(Instant::now()).await {
                info!("Prompt receiver closed, session monitor stopping");
                break;
            }
        }
    }

    /// Runs a single check. Returns `false` once the prompt channel is closed.
    pub async fn check_once(&self, now: Instant) -> bool {
        let status = self.watchdog.lock().check(now);
        debug!("Session check: {:?}", status);
        if status == WatchdogStatus::ShowWarning {
            return self.prompt_sender.send(self.prompt.clone()).await.is_ok();
        }
        !self.prompt_sender.is_closed()
    }
}
