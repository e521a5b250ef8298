use crate::models::{CheckIn, CheckInPatch};

/// Ordered log of check-in records.
///
/// Identifiers come from a counter that only moves forward, so an id is never
/// handed out twice in a process, even after the history has been cleared.
#[derive(Debug, Clone)]
pub struct CheckInLedger {
    records: Vec<CheckIn>,
    next_id: u64,
}

impl Default for CheckInLedger {
    fn default() -> Self {
        Self { records: Vec::new(), next_id: 1 }
    }
}

impl CheckInLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next identifier to `record`, appends it and returns the id.
    pub fn append(&mut self, mut record: CheckIn) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        record.id = id;
        self.records.push(record);
        id
    }

    /// Merges `patch` into the record with this id. Returns `false` if there is none.
    pub fn update_by_id(&mut self, id: u64, patch: CheckInPatch) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                patch.apply(record);
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: u64) -> Option<&CheckIn> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The `Checked In` record currently holding `dock_name`, if any
    pub fn find_active_by_dock(&self, dock_name: &str) -> Option<&CheckIn> {
        self.records
            .iter()
            .find(|record| record.is_active() && record.dock == dock_name)
    }

    pub fn records(&self) -> &[CheckIn] {
        &self.records
    }

    pub fn active(&self) -> impl Iterator<Item = &CheckIn> {
        self.records.iter().filter(|record| record.is_active())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
