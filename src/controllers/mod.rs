pub mod console;
pub mod check_in;

pub use console::ConsoleCommand;
pub use check_in::{CheckInController, ControllerResponse};
