use tokio::sync::{mpsc, oneshot};
use crate::config::Settings;
use crate::errors::CheckInResult;
use crate::models::{CheckInForm, Operator};
use crate::state_management::{AppState, CommandProcessor, StateManagerCommand};

/// Handle to the dock and check-in state.
///
/// Cloning is cheap; every clone talks to the same `CommandProcessor`.
#[derive(Clone)]
pub struct CheckInStateManager {
    command_sender: mpsc::Sender<StateManagerCommand>,
}

impl CheckInStateManager {
    /// Creates a new `CheckInStateManager` and the processor that must be spawned to serve it.
    ///
    /// # Arguments
    ///
    /// * `settings` - The application settings, used for the section layout and seed data.
    pub fn new(settings: &Settings) -> (Self, CommandProcessor) {
        Self::with_state(AppState::from_settings(settings))
    }

    pub fn with_state(state: AppState) -> (Self, CommandProcessor) {
        let (command_sender, command_receiver) = mpsc::channel(100);
        (Self { command_sender }, CommandProcessor::new(command_receiver, state))
    }

    /// Creates the manager and spawns its processor on the current runtime.
    pub fn spawn(state: AppState) -> Self {
        let (manager, processor) = Self::with_state(state);
        tokio::spawn(async move {
            if let Err(e) = processor.run().await {
                tracing::error!("Error in command processor: {:?}", e);
            }
        });
        manager
    }

    pub async fn check_in(&self, form: CheckInForm, operator: Operator) -> CheckInResult<u64> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::CheckIn(Box::new(form), operator, tx)).await?;
        rx.await?
    }

    pub async fn check_out(&self, check_in_id: u64, operator: Operator) -> CheckInResult<()> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::CheckOut(check_in_id, operator, tx)).await?;
        rx.await?
    }

    pub async fn reassign(&self, check_in_id: u64, new_dock: String, operator: Operator) -> CheckInResult<()> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::Reassign(check_in_id, new_dock, operator, tx)).await?;
        rx.await?
    }

    pub async fn toggle_maintenance(&self, dock_name: String) -> CheckInResult<()> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::ToggleMaintenance(dock_name, tx)).await?;
        rx.await?
    }

    pub async fn clear_all_docks(&self, operator: Operator) -> CheckInResult<()> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::ClearAllDocks(operator, tx)).await?;
        rx.await?
    }

    pub async fn clear_maintenance(&self) -> CheckInResult<()> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::ClearMaintenance(tx)).await?;
        rx.await?
    }

    pub async fn clear_history(&self) -> CheckInResult<()> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::ClearHistory(tx)).await?;
        rx.await?
    }

    /// A copy of the current state for rendering and export
    pub async fn snapshot(&self) -> CheckInResult<AppState> {
        let (tx, rx) = oneshot::channel();
        self.command_sender.send(StateManagerCommand::Snapshot(tx)).await?;
        Ok(rx.await?)
    }
}
