use indexmap::IndexMap;
use tracing::debug;

use crate::data::{WorldCupRecord, format_stat};

pub const EDITION_REGION: &str = "edition-EDITION";
pub const WINNER_REGION: &str = "edition-WINNER";
pub const GOALS_REGION: &str = "edition-GOALS";

/// Text display regions for the most recently inspected edition.
///
/// Regions are keyed by their host-page element ids and keep insertion order
/// so hosts can walk them stably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPanel {
    regions: IndexMap<String, String>,
}

impl DetailPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites all three regions with the record's edition label, winner
    /// label and goal count.
    pub fn show(&mut self, record: &WorldCupRecord) {
        debug!(year = record.year, winner = %record.winner, "detail panel updated");
        self.regions
            .insert(EDITION_REGION.to_owned(), record.edition.clone());
        self.regions
            .insert(WINNER_REGION.to_owned(), record.winner.clone());
        self.regions
            .insert(GOALS_REGION.to_owned(), format_stat(record.goals));
    }

    #[must_use]
    pub fn region(&self, key: &str) -> Option<&str> {
        self.regions.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn regions(&self) -> &IndexMap<String, String> {
        &self.regions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
