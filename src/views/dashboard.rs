use std::fmt;
use crate::models::{CheckIn, CheckInStatus, DockStatus};
use crate::state_management::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub active_check_ins: usize,
    pub available_docks: usize,
    pub occupied_docks: usize,
    pub maintenance_docks: usize,
}

impl DashboardStats {
    pub fn from_state(state: &AppState) -> Self {
        let registry = state.registry();
        Self {
            active_check_ins: state.ledger().active().count(),
            available_docks: registry.count_by_status(DockStatus::Available),
            occupied_docks: registry.count_by_status(DockStatus::Occupied),
            maintenance_docks: registry.count_by_status(DockStatus::Maintenance),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRow {
    pub id: u64,
    pub driver_name: String,
    pub company: String,
    pub dock: String,
    pub reassigned_time: Option<String>,
    pub time: String,
    pub check_out_time: Option<String>,
    pub status: CheckInStatus,
    /// Reassign and checkout are only offered for active check-ins
    pub actions_enabled: bool,
}

impl From<&CheckIn> for DashboardRow {
    fn from(record: &CheckIn) -> Self {
        Self {
            id: record.id,
            driver_name: record.driver_name.clone(),
            company: record.company.clone(),
            dock: record.dock.clone(),
            reassigned_time: record.reassigned_time.clone(),
            time: record.time.clone(),
            check_out_time: record.check_out_time.clone(),
            status: record.status,
            actions_enabled: record.is_active(),
        }
    }
}

/// Operations dashboard: headline counts and the full check-in table
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub rows: Vec<DashboardRow>,
    /// Docks offered in each row's reassign dropdown
    pub reassign_options: Vec<String>,
}

impl DashboardView {
    pub fn build(state: &AppState) -> Self {
        Self {
            stats: DashboardStats::from_state(state),
            rows: state.ledger().records().iter().map(DashboardRow::from).collect(),
            reassign_options: state.registry().available_docks().into_iter()
                .map(|dock| dock.name.clone())
                .collect(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Operations Dashboard ==")?;
        writeln!(
            f,
            "Active check-ins: {} | Available: {} | Occupied: {} | Maintenance: {}",
            self.stats.active_check_ins,
            self.stats.available_docks,
            self.stats.occupied_docks,
            self.stats.maintenance_docks
        )?;
        writeln!(f, "{:<4} {:<20} {:<18} {:<10} {:<20} {:<12}", "ID", "Driver", "Company", "Dock", "In/Out", "Status")?;
        for row in &self.rows {
            let times = match &row.check_out_time {
                Some(out) => format!("{} / {}", row.time, out),
                None => row.time.clone(),
            };
            write!(
                f,
                "{:<4} {:<20} {:<18} {:<10} {:<20} {:<12}",
                row.id, row.driver_name, row.company, row.dock, times, row.status.to_string()
            )?;
            if let Some(reassigned) = &row.reassigned_time {
                write!(f, " (reassigned {})", reassigned)?;
            }
            if row.actions_enabled {
                write!(f, " [reassign | checkout]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
