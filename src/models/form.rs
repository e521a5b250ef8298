//! # Check-In Form Draft

//! The form captures a driver's details before they are committed as a `CheckIn`.
//! It is owned by the check-in view, reset after a successful submission and left as-is otherwise.

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::CheckInError;
use crate::models::{clock_time, local_now};

/// Fields an operator can fill in on the check-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    DriverName,
    TrailerNumber,
    Company,
    AssignedDock,
    TruckNumber,
    ArrivalTime,
    PhoneNumber,
    Comments,
}

impl FormField {
    /// Every field, in the order the form shows them
    pub const ALL: [FormField; 8] = [
        FormField::DriverName,
        FormField::TrailerNumber,
        FormField::Company,
        FormField::AssignedDock,
        FormField::TruckNumber,
        FormField::ArrivalTime,
        FormField::PhoneNumber,
        FormField::Comments,
    ];

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::DriverName
                | FormField::TrailerNumber
                | FormField::Company
                | FormField::AssignedDock
                | FormField::ArrivalTime
        )
    }
}

impl FromStr for FormField {
    type Err = CheckInError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "drivername" | "driver" => Ok(FormField::DriverName),
            "trailernumber" | "trailer" => Ok(FormField::TrailerNumber),
            "company" => Ok(FormField::Company),
            "assigneddock" | "dock" => Ok(FormField::AssignedDock),
            "trucknumber" | "truck" => Ok(FormField::TruckNumber),
            "arrivaltime" | "arrival" => Ok(FormField::ArrivalTime),
            "phonenumber" | "phone" => Ok(FormField::PhoneNumber),
            "comments" | "comment" => Ok(FormField::Comments),
            _ => Err(CheckInError::ValidationError(format!("unknown form field '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInForm {
    pub driver_name: String,
    pub trailer_number: String,
    pub company: String,
    pub assigned_dock: String,
    pub truck_number: String,
    pub arrival_time: String,
    pub phone_number: String,
    pub comments: String,
}

impl CheckInForm {
    /// A blank form with the arrival time pre-filled with the current local time
    pub fn new() -> Self {
        Self {
            arrival_time: clock_time(local_now()),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::DriverName => self.driver_name = value,
            FormField::TrailerNumber => self.trailer_number = value,
            FormField::Company => self.company = value,
            FormField::AssignedDock => self.assigned_dock = value,
            FormField::TruckNumber => self.truck_number = value,
            FormField::ArrivalTime => self.arrival_time = value,
            FormField::PhoneNumber => self.phone_number = value,
            FormField::Comments => self.comments = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::DriverName => &self.driver_name,
            FormField::TrailerNumber => &self.trailer_number,
            FormField::Company => &self.company,
            FormField::AssignedDock => &self.assigned_dock,
            FormField::TruckNumber => &self.truck_number,
            FormField::ArrivalTime => &self.arrival_time,
            FormField::PhoneNumber => &self.phone_number,
            FormField::Comments => &self.comments,
        }
    }

    /// Required fields that are still empty
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
        .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Whether the submit control is enabled
    pub fn submit_enabled(&self, is_submitting: bool) -> bool {
        self.is_valid() && !is_submitting
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
