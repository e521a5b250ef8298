use crate::config::Settings;
use crate::models::{CheckIn, Section};
use crate::state_management::{CheckInLedger, DockRegistry, NotificationFeed};

/// Everything the check-in service knows: docks, check-ins and notifications.
///
/// Fields are readable by anyone holding a reference; mutation goes through
/// `CheckInOrchestrator` so the three stores stay consistent.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) registry: DockRegistry,
    pub(crate) ledger: CheckInLedger,
    pub(crate) feed: NotificationFeed,
}

impl AppState {
    pub fn new(sections: &[Section]) -> Self {
        Self {
            registry: DockRegistry::from_sections(sections),
            ledger: CheckInLedger::new(),
            feed: NotificationFeed::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::new(&settings.section_definitions());
        if settings.seed_demo_data {
            state.ledger.append(CheckIn::demo());
        }
        state
    }

    pub fn registry(&self) -> &DockRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &CheckInLedger {
        &self.ledger
    }

    pub fn feed(&self) -> &NotificationFeed {
        &self.feed
    }
}
