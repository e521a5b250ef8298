pub mod provider;
pub mod session;

pub use provider::{AuthProvider, StaticCredentialProvider};
pub use session::{Session, SessionWatchdog, WatchdogStatus};
