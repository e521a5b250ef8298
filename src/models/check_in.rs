//! # Driver Check-In Records

//! A `CheckIn` records a driver's arrival and dock assignment. Records are created by a check-in,
//! updated in place by checkout and reassignment, and only ever removed by the admin history clear.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Truck number stored when the driver does not provide one.
pub const NO_TRUCK_NUMBER: &str = "N/A";

/// Lifecycle of a check-in record.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Serialize, Deserialize, Display)]
pub enum CheckInStatus {
    /// Only produced by demo seed data; no operation moves a record into or out of it.
    #[serde(rename = "In Progress")]
    #[display("In Progress")]
    InProgress,
    #[serde(rename = "Checked In")]
    #[display("Checked In")]
    CheckedIn,
    /// Terminal.
    #[serde(rename = "Checked Out")]
    #[display("Checked Out")]
    CheckedOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: u64,
    pub driver_name: String,
    pub company: String,
    /// Name of the dock at the time of the last assignment.
    pub dock: String,
    /// Check-in time, display formatted.
    pub time: String,
    pub status: CheckInStatus,
    pub trailer_number: String,
    pub truck_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_in_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_out_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassigned_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassigned_by: Option<String>,
}

impl CheckIn {
    pub fn is_active(&self) -> bool {
        self.status == CheckInStatus::CheckedIn
    }

    /// The demo record the ledger can be seeded with.
    pub fn demo() -> Self {
        Self {
            id: 0,
            driver_name: "Mike Johnson".to_string(),
            company: "ABC Logistics".to_string(),
            dock: "Dock 201".to_string(),
            time: "10:15 AM".to_string(),
            status: CheckInStatus::InProgress,
            trailer_number: "TRL-001".to_string(),
            truck_number: "TRK-456".to_string(),
            checked_in_by: None,
            timestamp: None,
            check_out_time: None,
            checked_out_by: None,
            checkout_timestamp: None,
            reassigned_time: None,
            reassigned_by: None,
        }
    }
}

/// A partial update merged into an existing record; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckInPatch {
    pub dock: Option<String>,
    pub status: Option<CheckInStatus>,
    pub check_out_time: Option<String>,
    pub checked_out_by: Option<String>,
    pub checkout_timestamp: Option<DateTime<Utc>>,
    pub reassigned_time: Option<String>,
    pub reassigned_by: Option<String>,
}

impl CheckInPatch {
    pub fn apply(self, record: &mut CheckIn) {
        if let Some(dock) = self.dock {
            record.dock = dock;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if self.check_out_time.is_some() {
            record.check_out_time = self.check_out_time;
        }
        if self.checked_out_by.is_some() {
            record.checked_out_by = self.checked_out_by;
        }
        if self.checkout_timestamp.is_some() {
            record.checkout_timestamp = self.checkout_timestamp;
        }
        if self.reassigned_time.is_some() {
            record.reassigned_time = self.reassigned_time;
        }
        if self.reassigned_by.is_some() {
            record.reassigned_by = self.reassigned_by;
        }
    }
}
