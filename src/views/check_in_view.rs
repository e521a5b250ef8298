use std::fmt;
use crate::models::{CheckInForm, Dock, DockStatus, FormField, Section};
use crate::state_management::AppState;

/// An entry in the dock dropdown of the check-in form
#[derive(Debug, Clone, PartialEq)]
pub struct DockOption {
    pub value: String,
    pub label: String,
}

impl DockOption {
    pub fn from_dock(dock: &Dock) -> Self {
        Self {
            value: dock.name.clone(),
            label: format!("{} - {}", dock.name, dock.section),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl MaintenanceButton {
    fn for_status(status: DockStatus) -> Self {
        match status {
            DockStatus::Occupied => Self { label: "In Use", enabled: false },
            DockStatus::Maintenance => Self { label: "Return to Service", enabled: true },
            DockStatus::Available => Self { label: "Set Maintenance", enabled: true },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DockCard {
    pub dock_name: String,
    pub status: DockStatus,
    pub status_label: &'static str,
    pub driver: Option<String>,
    pub company: Option<String>,
    /// Id of the active check-in offered for quick checkout
    pub checkout_id: Option<u64>,
    pub maintenance: MaintenanceButton,
}

impl DockCard {
    pub fn build(dock: &Dock, state: &AppState) -> Self {
        let active = state.ledger().find_active_by_dock(&dock.name);
        let status_label = match dock.status {
            DockStatus::Available => "Available",
            DockStatus::Occupied => "Occupied",
            DockStatus::Maintenance => "Maintenance",
        };
        Self {
            dock_name: dock.name.clone(),
            status: dock.status,
            status_label,
            driver: (!dock.current_driver.is_empty()).then(|| dock.current_driver.clone()),
            company: active.map(|record| record.company.clone()),
            checkout_id: active
                .filter(|_| dock.status == DockStatus::Occupied)
                .map(|record| record.id),
            maintenance: MaintenanceButton::for_status(dock.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub name: String,
    pub cards: Vec<DockCard>,
}

/// The check-in screen: the form, its dock choices and the per-section dock grid
#[derive(Debug, Clone)]
pub struct CheckInView {
    pub form: CheckInForm,
    pub submit_enabled: bool,
    pub dock_options: Vec<DockOption>,
    pub sections: Vec<SectionView>,
}

impl CheckInView {
    pub fn build(state: &AppState, sections: &[Section], form: &CheckInForm, is_submitting: bool) -> Self {
        Self {
            form: form.clone(),
            submit_enabled: form.submit_enabled(is_submitting),
            dock_options: state.registry().available_docks().into_iter().map(DockOption::from_dock).collect(),
            sections: sections.iter()
                .map(|section| SectionView {
                    name: section.name.clone(),
                    cards: state.registry().in_section(&section.name)
                        .map(|dock| DockCard::build(dock, state))
                        .collect(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for CheckInView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Driver Check-In ==")?;
        for (field, label) in [
            (FormField::DriverName, "Driver Name *"),
            (FormField::TrailerNumber, "Trailer Number *"),
            (FormField::Company, "Company *"),
            (FormField::TruckNumber, "Truck Number"),
            (FormField::AssignedDock, "Assigned Dock *"),
            (FormField::ArrivalTime, "Arrival Time *"),
            (FormField::PhoneNumber, "Phone Number"),
            (FormField::Comments, "Comments"),
        ] {
            writeln!(f, "  {:<17} {}", label, self.form.get(field))?;
        }
        writeln!(
            f,
            "  [Complete Check-In] {}",
            if self.submit_enabled { "ready" } else { "disabled" }
        )?;
        writeln!(f, "Available docks ({}):", self.dock_options.len())?;
        for option in &self.dock_options {
            writeln!(f, "  {}", option.label)?;
        }
        for section in &self.sections {
            writeln!(f, "-- {} --", section.name)?;
            for card in &section.cards {
                write!(f, "  {:<9} {:<12}", card.dock_name, card.status_label)?;
                if let Some(driver) = &card.driver {
                    write!(f, " driver: {}", driver)?;
                }
                if let Some(company) = &card.company {
                    write!(f, " ({})", company)?;
                }
                if let Some(id) = card.checkout_id {
                    write!(f, " [checkout {}]", id)?;
                }
                let suffix = if card.maintenance.enabled { "" } else { " (disabled)" };
                writeln!(f, " [{}{}]", card.maintenance.label, suffix)?;
            }
        }
        Ok(())
    }
}
