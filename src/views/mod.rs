//! # Views

//! Read-only projections over `AppState` for the three console screens, each with a
//! plain-text rendering. Nothing here mutates state.

pub mod check_in_view;
pub mod dashboard;
pub mod admin;

pub use check_in_view::{CheckInView, DockCard, DockOption, MaintenanceButton, SectionView};
pub use dashboard::{DashboardRow, DashboardStats, DashboardView};
pub use admin::AdminView;

use derive_more::Display;

/// The screen the operator is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ActiveView {
    #[default]
    #[display("Check-In")]
    CheckIn,
    #[display("Dashboard")]
    Dashboard,
    #[display("Admin")]
    Admin,
}

impl std::str::FromStr for ActiveView {
    type Err = crate::errors::CheckInError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "checkin" | "check-in" | "form" => Ok(ActiveView::CheckIn),
            "dashboard" => Ok(ActiveView::Dashboard),
            "admin" => Ok(ActiveView::Admin),
            other => Err(crate::errors::CheckInError::UnknownCommand(format!("view {}", other))),
        }
    }
}
