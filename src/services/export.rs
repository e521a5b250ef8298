//! # Data Export

//! Writes a snapshot of docks, check-ins and notifications as indented JSON.
//! The file is write-only: there is no matching import.

use std::path::PathBuf;
use serde::Serialize;
use tracing::info;
use crate::config::ExportSettings;
use crate::errors::CheckInResult;
use crate::models::{CheckIn, Dock, Notification};
use crate::state_management::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot<'a> {
    pub docks: &'a [Dock],
    pub check_ins: &'a [CheckIn],
    pub notifications: Vec<&'a Notification>,
}

impl<'a> ExportSnapshot<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            docks: state.registry().docks(),
            check_ins: state.ledger().records(),
            notifications: state.feed().iter().collect(),
        }
    }

    pub fn to_json(&self) -> CheckInResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct DataExporter {
    directory: PathBuf,
    file_name: String,
}

impl DataExporter {
    pub fn new(settings: &ExportSettings) -> Self {
        Self {
            directory: settings.path.clone(),
            file_name: settings.file_name.clone(),
        }
    }

    pub fn target_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Serializes `state` and writes it to the export file, replacing any previous export.
    ///
    /// # Returns
    ///
    /// The path that was written
    pub async fn export(&self, state: &AppState) -> CheckInResult<PathBuf> {
        let json = ExportSnapshot::from_state(state).to_json()?;
        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.target_path();
        tokio::fs::write(&path, json).await?;
        info!("Exported {} docks and {} check-ins to {:?}",
            state.registry().docks().len(), state.ledger().len(), path);
        Ok(path)
    }
}
