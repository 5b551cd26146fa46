//! Application state.
//!
//! All mutable UI state lives here, owned by the app and lent to widgets:
//! the fetch state machines, the drill-down modal content, the refresh
//! confirmation flag, and the table's sort/filter settings. Widgets raise
//! changes through `&mut` access or return values; nothing is shared
//! through globals.

use bpa_business::{BusinessConfig, ModalRequest, RefreshTrigger, ReportFetch};

/// Sort and filter settings for the compliance table.
#[derive(Debug, Default)]
pub struct TableState {
    /// Active sort: column index and ascending flag.
    pub sort: Option<(usize, bool)>,
    /// Case-insensitive substring filter on the tenant name.
    pub filter: String,
}

impl TableState {
    /// Toggle sorting on a header click: ascending, then descending, then
    /// back to ascending when switching columns.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some((current, ascending)) if current == column => Some((column, !ascending)),
            _ => Some((column, true)),
        };
    }
}

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    pub report: ReportFetch,
    pub refresh: RefreshTrigger,
    /// Open drill-down modal, if any.
    pub modal: Option<ModalRequest>,
    /// Whether the refresh confirmation dialog is showing.
    pub confirm_open: bool,
    pub table: TableState,
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            report: ReportFetch::default(),
            refresh: RefreshTrigger::default(),
            modal: None,
            confirm_open: false,
            table: TableState::default(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(BusinessConfig::from_env())
    }
}
