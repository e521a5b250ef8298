pub mod dock;
pub mod check_in;
pub mod notification;
pub mod form;
pub mod operator;

pub use dock::*;
pub use check_in::*;
pub use notification::*;
pub use form::*;
pub use operator::*;

use chrono::{Local, NaiveDateTime};

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Formats a time the way check-in rows show it, e.g. `10:15 AM`
pub fn display_time(at: NaiveDateTime) -> String {
    at.format("%I:%M %p").to_string()
}

/// Formats a 24-hour `HH:MM` clock value, as used for arrival times
pub fn clock_time(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}
