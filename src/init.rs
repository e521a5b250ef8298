use std::sync::Arc;
use anyhow::Result;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use crate::auth::{AuthProvider, SessionWatchdog, StaticCredentialProvider};
use crate::config::Settings;
use crate::controllers::CheckInController;
use crate::monitoring::SessionMonitor;
use crate::state_management::{CheckInStateManager, CommandProcessor};


pub struct AppContext {
    pub settings: Arc<Settings>,
    pub state_manager: CheckInStateManager,
    pub command_processor: CommandProcessor,
    pub controller: CheckInController,
    pub session_monitor: SessionMonitor,
    /// Inactivity prompts raised by the session monitor
    pub prompt_receiver: mpsc::Receiver<String>,
}

/// Wires the application together from already-loaded settings.
///
/// Nothing is spawned here; the caller decides where the command processor and
/// session monitor run.
pub fn initialize(settings: Settings) -> Result<AppContext> {
    let settings = Arc::new(settings);

    let (state_manager, command_processor) = CheckInStateManager::new(&settings);
    let auth_provider: Arc<dyn AuthProvider> = Arc::new(StaticCredentialProvider::from_settings(&settings));
    if settings.users.is_empty() {
        tracing::warn!("No users configured; nobody will be able to log in");
    }

    let watchdog = Arc::new(Mutex::new(SessionWatchdog::new(&settings.session)));
    let (prompt_sender, prompt_receiver) = mpsc::channel(8);
    let session_monitor = SessionMonitor::new(
        Arc::clone(&watchdog),
        &settings.session,
        prompt_sender,
    );

    let controller = CheckInController::new(
        &settings,
        state_manager.clone(),
        auth_provider,
        watchdog,
    );

    Ok(AppContext {
        settings,
        state_manager,
        command_processor,
        controller,
        session_monitor,
        prompt_receiver,
    })
}
