use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use crate::catalog::Catalog;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::filter::{FilterCriteria, normalize};
use crate::render::TableView;
use crate::sort::{SortKey, SortState};

/// One interaction with the table controls.
///
/// Dropdown changes, header clicks, and reset apply immediately; raw search
/// keystrokes pass through the debouncer first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    SearchInput { value: String },
    SetRarity { value: Option<String> },
    SetType { value: Option<String> },
    SetSource { value: Option<String> },
    SetTool { value: Option<String> },
    SetAttunement { value: Option<String> },
    SetUse { value: Option<String> },
    ToggleSort { key: SortKey },
    ClearFilters,
}

/// All mutable table state for one viewer: active criteria, sort order, and
/// the pending search timer. Recomputation is synchronous and serial; the
/// debounce timer is the only async boundary.
#[derive(Debug)]
pub struct TableController {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    sort: SortState,
    debouncer: Debouncer,
}

impl TableController {
    /// Controller plus the channel on which debounced search commits
    /// arrive. The caller folds commits back in via [`commit_search`].
    ///
    /// [`commit_search`]: TableController::commit_search
    pub fn new(catalog: Arc<Catalog>) -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::with_debounce(catalog, SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(
        catalog: Arc<Catalog>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (debouncer, commits) = Debouncer::new(delay);
        (
            Self {
                catalog,
                criteria: FilterCriteria::default(),
                sort: SortState::default(),
                debouncer,
            },
            commits,
        )
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Render the table for the current state.
    pub fn view(&self) -> TableView {
        self.catalog.view(&self.criteria, self.sort)
    }

    /// Process one event. Immediate events recompute and return the fresh
    /// view; search input schedules a commit and returns `None`.
    pub fn apply(&mut self, event: TableEvent) -> Option<TableView> {
        match event {
            TableEvent::SearchInput { value } => {
                self.debouncer.schedule(value);
                None
            }
            TableEvent::SetRarity { value } => {
                self.criteria.rarity = normalize(value);
                Some(self.view())
            }
            TableEvent::SetType { value } => {
                self.criteria.item_type = normalize(value);
                Some(self.view())
            }
            TableEvent::SetSource { value } => {
                self.criteria.source = normalize(value);
                Some(self.view())
            }
            TableEvent::SetTool { value } => {
                self.criteria.tool = normalize(value);
                Some(self.view())
            }
            TableEvent::SetAttunement { value } => {
                self.criteria.attunement = normalize(value);
                Some(self.view())
            }
            TableEvent::SetUse { value } => {
                self.criteria.usage = normalize(value);
                Some(self.view())
            }
            TableEvent::ToggleSort { key } => {
                self.sort.toggle(key);
                Some(self.view())
            }
            TableEvent::ClearFilters => {
                // a search committed after the reset would resurrect stale text
                self.debouncer.cancel();
                self.criteria = FilterCriteria::default();
                Some(self.view())
            }
        }
    }

    /// Fold a committed search value into the criteria.
    pub fn commit_search(&mut self, value: String) -> TableView {
        debug!(search = %value, "search commit");
        self.criteria.search = normalize(Some(value));
        self.view()
    }
}
