//! # Check-In Orchestrator

//! The only sanctioned way to change docks and check-ins. Each operation updates the dock
//! registry, the check-in ledger and the notification feed together, so that a dock is
//! `occupied` exactly when one `Checked In` record names it.
//!
//! Operations on an unknown check-in id are silent no-ops. Operations that would break the
//! dock invariant (assigning a dock that is not available, taking an occupied dock out of
//! service) are rejected and leave the state untouched.

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info, warn};
use crate::errors::{CheckInError, CheckInResult};
use crate::models::{display_time, CheckIn, CheckInForm, CheckInPatch, CheckInStatus, DockStatus, Operator, NO_TRUCK_NUMBER};
use crate::state_management::AppState;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckInOrchestrator;

impl CheckInOrchestrator {
    pub fn new() -> Self {
        Self
    }

    /// Commits a filled-in form: occupies the dock, appends a `Checked In` record and a notification.
    ///
    /// # Returns
    ///
    /// * `Ok(id)` - the identifier of the new check-in
    /// * `Err(CheckInError::ValidationError)` if a required field is empty
    /// * `Err(CheckInError::UnknownDock)` / `Err(CheckInError::DockUnavailable)` if the dock cannot take the driver
    pub fn check_in(&self, state: &mut AppState, form: &CheckInForm, operator: &Operator) -> CheckInResult<u64> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(CheckInError::ValidationError(format!("missing required fields: {:?}", missing)));
        }
        Self::ensure_available(state, &form.assigned_dock)?;

        let now = Local::now();
        state.registry.set_status(&form.assigned_dock, DockStatus::Occupied, Some(&form.driver_name));

        let truck_number = if form.truck_number.is_empty() {
            NO_TRUCK_NUMBER.to_string()
        } else {
            form.truck_number.clone()
        };
        let id = state.ledger.append(CheckIn {
            id: 0,
            driver_name: form.driver_name.clone(),
            company: form.company.clone(),
            dock: form.assigned_dock.clone(),
            time: display_time(now.naive_local()),
            status: CheckInStatus::CheckedIn,
            trailer_number: form.trailer_number.clone(),
            truck_number,
            checked_in_by: Some(operator.to_string()),
            timestamp: Some(now.with_timezone(&Utc)),
            check_out_time: None,
            checked_out_by: None,
            checkout_timestamp: None,
            reassigned_time: None,
            reassigned_by: None,
        });

        state.feed.append(
            format!("{} checked in at {} by {}", form.driver_name, form.assigned_dock, operator),
            now.naive_local(),
        );
        info!("Check-in {} created: {} at {} by {}", id, form.driver_name, form.assigned_dock, operator);
        Ok(id)
    }

    /// Closes an active check-in and frees its dock.
    ///
    /// Unknown ids and records that are not `Checked In` are ignored.
    pub fn check_out(&self, state: &mut AppState, check_in_id: u64, operator: &Operator) -> CheckInResult<()> {
        let Some(record) = Self::active_record(state, check_in_id) else {
            return Ok(());
        };

        let now = Local::now();
        state.registry.set_status(&record.dock, DockStatus::Available, None);
        let check_out_time = display_time(now.naive_local());
        state.ledger.update_by_id(check_in_id, Self::checkout_patch(&check_out_time, operator, now.with_timezone(&Utc)));
        state.feed.append(
            format!("{} checked out from {} by {}", record.driver_name, record.dock, operator),
            now.naive_local(),
        );
        info!("Check-in {} closed: {} left {}", check_in_id, record.driver_name, record.dock);
        Ok(())
    }

    /// Moves an active check-in to another available dock.
    ///
    /// An empty target, an unknown id or an inactive record is ignored.
    pub fn reassign(&self, state: &mut AppState, check_in_id: u64, new_dock: &str, operator: &Operator) -> CheckInResult<()> {
        if new_dock.is_empty() {
            return Ok(());
        }
        let Some(record) = Self::active_record(state, check_in_id) else {
            return Ok(());
        };
        Self::ensure_available(state, new_dock)?;

        let now = Local::now();
        state.registry.set_status(&record.dock, DockStatus::Available, None);
        state.registry.set_status(new_dock, DockStatus::Occupied, Some(&record.driver_name));
        state.ledger.update_by_id(check_in_id, CheckInPatch {
            dock: Some(new_dock.to_string()),
            reassigned_time: Some(display_time(now.naive_local())),
            reassigned_by: Some(operator.to_string()),
            ..CheckInPatch::default()
        });
        state.feed.append(
            format!("{} reassigned from {} to {} by {}", record.driver_name, record.dock, new_dock, operator),
            now.naive_local(),
        );
        info!("Check-in {} reassigned from {} to {}", check_in_id, record.dock, new_dock);
        Ok(())
    }

    /// Flips a dock between `available` and `maintenance`.
    ///
    /// Unknown docks are ignored; occupied docks are refused.
    pub fn toggle_maintenance(&self, state: &mut AppState, dock_name: &str) -> CheckInResult<()> {
        let Some(status) = state.registry.find(dock_name).map(|dock| dock.status) else {
            debug!("Maintenance toggle for unknown dock {}", dock_name);
            return Ok(());
        };
        let next = match status {
            DockStatus::Occupied => {
                warn!("Refusing maintenance toggle on occupied {}", dock_name);
                return Err(CheckInError::DockOccupied(dock_name.to_string()));
            }
            DockStatus::Maintenance => DockStatus::Available,
            DockStatus::Available => DockStatus::Maintenance,
        };
        state.registry.set_status(dock_name, next, None);
        info!("{} is now {}", dock_name, next);
        Ok(())
    }

    /// Frees every dock, checking out whoever was still checked in.
    pub fn clear_all_docks(&self, state: &mut AppState, operator: &Operator) -> CheckInResult<()> {
        let now = Local::now();
        let check_out_time = display_time(now.naive_local());
        let active: Vec<u64> = state.ledger.active().map(|record| record.id).collect();
        for id in &active {
            state.ledger.update_by_id(*id, Self::checkout_patch(&check_out_time, operator, now.with_timezone(&Utc)));
        }
        let names: Vec<String> = state.registry.docks().iter().map(|dock| dock.name.clone()).collect();
        for name in names {
            state.registry.set_status(&name, DockStatus::Available, None);
        }
        info!("All docks cleared by {} ({} check-ins closed)", operator, active.len());
        Ok(())
    }

    /// Returns every dock in maintenance to service.
    pub fn clear_maintenance(&self, state: &mut AppState) -> CheckInResult<()> {
        let names: Vec<String> = state.registry.docks().iter()
            .filter(|dock| dock.status == DockStatus::Maintenance)
            .map(|dock| dock.name.clone())
            .collect();
        for name in &names {
            state.registry.set_status(name, DockStatus::Available, None);
        }
        info!("Maintenance cleared on {} docks", names.len());
        Ok(())
    }

    /// Discards all check-ins and notifications, freeing the docks they held.
    pub fn clear_history(&self, state: &mut AppState) -> CheckInResult<()> {
        let occupied: Vec<String> = state.registry.docks().iter()
            .filter(|dock| dock.status == DockStatus::Occupied)
            .map(|dock| dock.name.clone())
            .collect();
        for name in &occupied {
            state.registry.set_status(name, DockStatus::Available, None);
        }
        let discarded = state.ledger.len();
        state.ledger.clear();
        state.feed.clear_all();
        info!("Check-in history cleared ({} records discarded)", discarded);
        Ok(())
    }

    fn active_record(state: &AppState, check_in_id: u64) -> Option<CheckIn> {
        match state.ledger.find_by_id(check_in_id) {
            Some(record) if record.is_active() => Some(record.clone()),
            Some(record) => {
                debug!("Check-in {} is {}, nothing to do", check_in_id, record.status);
                None
            }
            None => {
                debug!("Check-in {} not found", check_in_id);
                None
            }
        }
    }

    fn ensure_available(state: &AppState, dock_name: &str) -> CheckInResult<()> {
        let dock = state.registry.find(dock_name)
            .ok_or_else(|| CheckInError::UnknownDock(dock_name.to_string()))?;
        if !dock.is_available() {
            warn!("{} requested but it is {}", dock_name, dock.status);
            return Err(CheckInError::DockUnavailable {
                dock: dock_name.to_string(),
                status: dock.status,
            });
        }
        Ok(())
    }

    fn checkout_patch(check_out_time: &str, operator: &Operator, at: DateTime<Utc>) -> CheckInPatch {
        CheckInPatch {
            status: Some(CheckInStatus::CheckedOut),
            check_out_time: Some(check_out_time.to_string()),
            checked_out_by: Some(operator.to_string()),
            checkout_timestamp: Some(at),
            ..CheckInPatch::default()
        }
    }
}
