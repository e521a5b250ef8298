use crate::models::{local_now, Dock, DockStatus, Section};

/// The loading docks of the building, generated once from the section layout.
#[derive(Debug, Clone, Default)]
pub struct DockRegistry {
    docks: Vec<Dock>,
}

impl DockRegistry {
    pub fn from_sections(sections: &[Section]) -> Self {
        Self {
            docks: sections.iter().flat_map(Section::docks).collect(),
        }
    }

    pub fn docks(&self) -> &[Dock] {
        &self.docks
    }

    pub fn find(&self, dock_name: &str) -> Option<&Dock> {
        self.docks.iter().find(|dock| dock.name == dock_name)
    }

    pub fn available_docks(&self) -> Vec<&Dock> {
        self.docks.iter().filter(|dock| dock.is_available()).collect()
    }

    pub fn in_section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Dock> + 'a {
        self.docks.iter().filter(move |dock| dock.section == section)
    }

    pub fn count_by_status(&self, status: DockStatus) -> usize {
        self.docks.iter().filter(|dock| dock.status == status).count()
    }

    /// Sets a dock's status and stamps `last_updated`.
    ///
    /// The driver is kept only when the dock becomes occupied. Returns `false`
    /// without touching anything when no dock has this name.
    pub fn set_status(&mut self, dock_name: &str, status: DockStatus, driver_name: Option<&str>) -> bool {
        let Some(dock) = self.docks.iter_mut().find(|dock| dock.name == dock_name) else {
            return false;
        };
        dock.status = status;
        dock.current_driver = match status {
            DockStatus::Occupied => driver_name.unwrap_or_default().to_string(),
            DockStatus::Available | DockStatus::Maintenance => String::new(),
        };
        dock.last_updated = Some(local_now());
        true
    }
}
