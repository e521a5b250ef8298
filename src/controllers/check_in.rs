use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tracing::info;

use crate::auth::{AuthProvider, SessionWatchdog};
use crate::config::Settings;
use crate::controllers::console::{ConsoleCommand, HELP};
use crate::errors::{CheckInError, CheckInResult};
use crate::models::{CheckInForm, Operator, Section};
use crate::services::DataExporter;
use crate::state_management::CheckInStateManager;
use crate::views::{ActiveView, AdminView, CheckInView, DashboardView};

/// What the console should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerResponse {
    Render(String),
    Quit,
}

/// Routes operator commands to the state manager and renders the active view.
///
/// The controller owns everything the screen needs but the state itself: the form draft,
/// the active view and the session. Every mutation of docks and check-ins goes through
/// the `CheckInStateManager`.
pub struct CheckInController {
    sections: Vec<Section>,
    state_manager: CheckInStateManager,
    auth_provider: Arc<dyn AuthProvider>,
    watchdog: Arc<Mutex<SessionWatchdog>>,
    exporter: DataExporter,
    submit_delay: Duration,
    form: CheckInForm,
    active_view: ActiveView,
}

impl CheckInController {
    /// Creates a new `CheckInController`
    ///
    /// # Arguments
    ///
    /// * `settings`: The application settings
    /// * `state_manager`: Handle to the dock and check-in state
    /// * `auth_provider`: Verifies login credentials
    /// * `watchdog`: The session watchdog, shared with the session monitor
    pub fn new(
        settings: &Settings,
        state_manager: CheckInStateManager,
        auth_provider: Arc<dyn AuthProvider>,
        watchdog: Arc<Mutex<SessionWatchdog>>,
    ) -> Self {
        info!("Initializing Check-In Controller");
        Self {
            sections: settings.section_definitions(),
            state_manager,
            auth_provider,
            watchdog,
            exporter: DataExporter::new(&settings.export),
            submit_delay: Duration::from_millis(settings.delays.submit_ms),
            form: CheckInForm::new(),
            active_view: ActiveView::default(),
        }
    }

    pub fn form(&self) -> &CheckInForm {
        &self.form
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn operator(&self) -> Option<Operator> {
        self.watchdog.lock().operator().cloned()
    }

    /// Parses and executes one console line
    pub async fn handle_line(&mut self, line: &str) -> CheckInResult<ControllerResponse> {
        let command: ConsoleCommand = line.parse()?;
        self.handle(command).await
    }

    pub async fn handle(&mut self, command: ConsoleCommand) -> CheckInResult<ControllerResponse> {
        let command = match command {
            ConsoleCommand::Help => return Ok(ControllerResponse::Render(HELP.to_string())),
            ConsoleCommand::Quit => return Ok(ControllerResponse::Quit),
            ConsoleCommand::Login { username, password } => {
                let operator = self.auth_provider.verify(&username, &password).await?;
                self.watchdog.lock().login(operator.clone());
                self.form.reset();
                self.active_view = ActiveView::CheckIn;
                let screen = self.render().await?;
                return Ok(ControllerResponse::Render(format!("Logged in as: {}\n{}", operator, screen)));
            }
            other => other,
        };

        let operator = {
            let mut watchdog = self.watchdog.lock();
            let operator = watchdog.operator().cloned().ok_or(CheckInError::NotAuthenticated)?;
            watchdog.record_activity();
            operator
        };

        let notice = match command {
            ConsoleCommand::Logout => {
                self.watchdog.lock().logout();
                return Ok(ControllerResponse::Render("Logged out".to_string()));
            }
            ConsoleCommand::Continue => {
                self.watchdog.lock().continue_session();
                "Session continued".to_string()
            }
            ConsoleCommand::View(view) => {
                self.active_view = view;
                String::new()
            }
            ConsoleCommand::Set(field, value) => {
                self.form.set(field, value);
                self.active_view = ActiveView::CheckIn;
                String::new()
            }
            ConsoleCommand::ResetForm => {
                self.form.reset();
                self.active_view = ActiveView::CheckIn;
                String::new()
            }
            ConsoleCommand::Submit => self.submit(operator).await?,
            ConsoleCommand::CheckOut(id) => {
                self.state_manager.check_out(id, operator).await?;
                String::new()
            }
            ConsoleCommand::Reassign(id, dock) => {
                self.state_manager.reassign(id, dock, operator).await?;
                String::new()
            }
            ConsoleCommand::Maintenance(dock) => {
                self.state_manager.toggle_maintenance(dock).await?;
                String::new()
            }
            ConsoleCommand::ClearDocks => {
                self.state_manager.clear_all_docks(operator).await?;
                "All docks cleared".to_string()
            }
            ConsoleCommand::ClearMaintenance => {
                self.state_manager.clear_maintenance().await?;
                "Maintenance mode cleared".to_string()
            }
            ConsoleCommand::ClearHistory => {
                self.state_manager.clear_history().await?;
                "Check-in history cleared".to_string()
            }
            ConsoleCommand::Export => {
                let state = self.state_manager.snapshot().await?;
                let path = self.exporter.export(&state).await?;
                format!("Data exported to {}", path.display())
            }
            // answered before the session check
            ConsoleCommand::Login { .. } | ConsoleCommand::Help | ConsoleCommand::Quit => String::new(),
        };

        let screen = self.render().await?;
        if notice.is_empty() {
            Ok(ControllerResponse::Render(screen))
        } else {
            Ok(ControllerResponse::Render(format!("{}\n{}", notice, screen)))
        }
    }

    /// Commits the form, if it is complete, after the configured submission delay
    async fn submit(&mut self, operator: Operator) -> CheckInResult<String> {
        if !self.form.submit_enabled(false) {
            return Err(CheckInError::ValidationError(format!(
                "Complete Check-In is disabled, missing: {:?}",
                self.form.missing_fields()
            )));
        }
        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }
        self.state_manager.check_in(self.form.clone(), operator.clone()).await?;
        let welcome = format!(
            "Welcome, {}! You've been assigned to {}\nProcessed by: {}",
            self.form.driver_name, self.form.assigned_dock, operator
        );
        self.form.reset();
        Ok(welcome)
    }

    /// Renders the active view against a fresh snapshot of the state
    pub async fn render(&self) -> CheckInResult<String> {
        let state = self.state_manager.snapshot().await?;
        let header = match self.operator() {
            Some(operator) => format!("[{}] Logged in as: {}", self.active_view, operator),
            None => format!("[{}] Not logged in", self.active_view),
        };
        let body = match self.active_view {
            ActiveView::CheckIn => CheckInView::build(&state, &self.sections, &self.form, false).to_string(),
            ActiveView::Dashboard => DashboardView::build(&state).to_string(),
            ActiveView::Admin => AdminView::build(&state).to_string(),
        };
        Ok(format!("{}\n{}", header, body))
    }
}
