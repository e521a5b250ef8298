use tokio::sync::{mpsc, oneshot};
use tracing::{error, info};
use crate::errors::{CheckInError, CheckInResult};
use crate::models::{CheckInForm, Operator};
use crate::state_management::{AppState, CheckInOrchestrator};

type Reply<T> = oneshot::Sender<CheckInResult<T>>;

/// Represents the different commands that can be processed by the CommandProcessor
#[derive(Debug)]
pub enum StateManagerCommand {
    CheckIn(Box<CheckInForm>, Operator, Reply<u64>),
    CheckOut(u64, Operator, Reply<()>),
    Reassign(u64, String, Operator, Reply<()>),
    ToggleMaintenance(String, Reply<()>),
    ClearAllDocks(Operator, Reply<()>),
    ClearMaintenance(Reply<()>),
    ClearHistory(Reply<()>),
    Snapshot(oneshot::Sender<AppState>),
}

impl StateManagerCommand {
    fn name(&self) -> &'static str {
        match self {
            StateManagerCommand::CheckIn(..) => "CheckIn",
            StateManagerCommand::CheckOut(..) => "CheckOut",
            StateManagerCommand::Reassign(..) => "Reassign",
            StateManagerCommand::ToggleMaintenance(..) => "ToggleMaintenance",
            StateManagerCommand::ClearAllDocks(..) => "ClearAllDocks",
            StateManagerCommand::ClearMaintenance(..) => "ClearMaintenance",
            StateManagerCommand::ClearHistory(..) => "ClearHistory",
            StateManagerCommand::Snapshot(..) => "Snapshot",
        }
    }
}

/// Owns the application state and applies commands to it one at a time.
///
/// Each command runs to completion before the next is received, which makes every
/// orchestrator operation a transaction over the registry, ledger and feed.
pub struct CommandProcessor {
    command_receiver: mpsc::Receiver<StateManagerCommand>,
    state: AppState,
    orchestrator: CheckInOrchestrator,
}

impl CommandProcessor {
    /// Creates a new CommandProcessor
    ///
    /// # Arguments
    ///
    /// * `command_receiver` - The receiver end of the command channel
    /// * `state` - The initial application state
    pub fn new(command_receiver: mpsc::Receiver<StateManagerCommand>, state: AppState) -> Self {
        Self {
            command_receiver,
            state,
            orchestrator: CheckInOrchestrator::new(),
        }
    }

    /// Runs the command processing loop
    ///
    /// This method continuously receives commands and processes them until every sender is dropped
    pub async fn run(mut self) -> CheckInResult<()> {
        info!("Command processor started with {} docks", self.state.registry().docks().len());
        while let Some(command) = self.command_receiver.recv().await {
            let name = command.name();
            if let Err(e) = self.process_command(command) {
                error!("Error processing {} command: {:?}", name, e);
            }
        }
        info!("Command channel closed, command processor stopping");
        Ok(())
    }

    /// Processes a single command
    ///
    /// The only error returned is a failure to deliver the reply; operation errors travel back to the caller.
    fn process_command(&mut self, command: StateManagerCommand) -> CheckInResult<()> {
        let name = command.name();
        let state = &mut self.state;
        let delivered = match command {
            StateManagerCommand::CheckIn(form, operator, reply) => {
                reply.send(self.orchestrator.check_in(state, &form, &operator)).is_ok()
            }
            StateManagerCommand::CheckOut(id, operator, reply) => {
                reply.send(self.orchestrator.check_out(state, id, &operator)).is_ok()
            }
            StateManagerCommand::Reassign(id, dock, operator, reply) => {
                reply.send(self.orchestrator.reassign(state, id, &dock, &operator)).is_ok()
            }
            StateManagerCommand::ToggleMaintenance(dock, reply) => {
                reply.send(self.orchestrator.toggle_maintenance(state, &dock)).is_ok()
            }
            StateManagerCommand::ClearAllDocks(operator, reply) => {
                reply.send(self.orchestrator.clear_all_docks(state, &operator)).is_ok()
            }
            StateManagerCommand::ClearMaintenance(reply) => {
                reply.send(self.orchestrator.clear_maintenance(state)).is_ok()
            }
            StateManagerCommand::ClearHistory(reply) => {
                reply.send(self.orchestrator.clear_history(state)).is_ok()
            }
            StateManagerCommand::Snapshot(reply) => reply.send(state.clone()).is_ok(),
        };
        if delivered {
            Ok(())
        } else {
            Err(CheckInError::ChannelSendError(format!("Failed to send {} response", name)))
        }
    }
}
