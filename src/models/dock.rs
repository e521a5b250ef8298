//! # Loading Dock Representation

//! This module defines the `Dock` struct and the fixed `Section` layout it is generated from.
//! Docks are created once at startup by expanding each section's numeric range and live for the
//! whole process; only the orchestrator changes their status.

use chrono::NaiveDateTime;
use derive_more::Display;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The five physical sections of the building, used when no sections are configured.
pub static DEFAULT_SECTIONS: Lazy<Vec<Section>> = Lazy::new(|| {
    vec![
        Section::new("Driver Check-In Doors (201–203)", 201, 203),
        Section::new("Cooler Section (204–216)", 204, 216),
        Section::new("Freezer Section (217–232)", 217, 232),
        Section::new("Dry Dock (233–240)", 233, 240),
        Section::new("Driver Check-In Doors (241–243)", 241, 243),
    ]
});

/// Represents the different states a loading dock can be in.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum DockStatus {
    /// Free to be assigned to an arriving driver.
    #[display("available")]
    Available,
    /// A checked-in driver is using the dock.
    #[display("occupied")]
    Occupied,
    /// Out of service; never offered for assignment.
    #[display("maintenance")]
    Maintenance,
}

/// A contiguous, named range of dock numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl Section {
    pub fn new(name: &str, start: u32, end: u32) -> Self {
        Self { name: name.to_string(), start, end }
    }

    /// Expands the section's numeric range into fresh, available docks
    pub fn docks(&self) -> Vec<Dock> {
        (self.start..=self.end)
            .map(|number| Dock::new(number, &self.name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Represents the state associated with a single loading dock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dock {
    /// Stable identifier, e.g. `dock-205`.
    pub id: String,
    /// Display name, e.g. `Dock 205`. Check-ins refer to docks by this name.
    pub name: String,
    /// Name of the section the dock belongs to.
    pub section: String,
    pub status: DockStatus,
    /// Driver occupying the dock, empty unless occupied.
    pub current_driver: String,
    /// When the status last changed.
    pub last_updated: Option<NaiveDateTime>,
}

impl Dock {
    pub fn new(number: u32, section: &str) -> Self {
        Self {
            id: format!("dock-{}", number),
            name: format!("Dock {}", number),
            section: section.to_string(),
            status: DockStatus::Available,
            current_driver: String::new(),
            last_updated: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == DockStatus::Available
    }
}
