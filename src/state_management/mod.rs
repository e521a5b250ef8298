pub mod dock_registry;
pub mod check_in_ledger;
pub mod notification_feed;
pub mod app_state;
pub mod orchestrator;
pub mod command_processor;
pub mod state_manager;

pub use dock_registry::DockRegistry;
pub use check_in_ledger::CheckInLedger;
pub use notification_feed::NotificationFeed;
pub use app_state::AppState;
pub use orchestrator::CheckInOrchestrator;
pub use command_processor::{CommandProcessor, StateManagerCommand};
pub use state_manager::CheckInStateManager;
