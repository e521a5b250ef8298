pub mod session_monitor;

pub use session_monitor::{SessionMonitor, inactivity_prompt};
