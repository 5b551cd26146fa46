//! Business logic for the Best Practice Analyser console.
//!
//! This crate owns everything the rendering surfaces (`bpa-ui`, `bpa-cli`)
//! share: the report data model, the delimited-field parsers, the cell
//! rendering policies, the column declarations, and the API client state
//! machines for fetching the report and triggering a forced refresh.

mod cells;
mod columns;
mod config;
mod delimited;
mod error;
mod fetch;
mod refresh;
mod report;
pub mod version_info;

pub use cells::{BadgeColor, BoolPolicy, CellDisplay, DrillDownKind, pluralize};
pub use columns::{Column, ColumnKind, ModalRequest, columns, drill_down};
pub use config::BusinessConfig;
pub use delimited::{ENTRY_DELIMITER, LicenseRecord, parse_license_records, parse_list};
pub use error::FetchError;
pub use fetch::{REPORT_ROUTE, ReportFetch, ReportFetchResult, fetch_report, fetch_report_async};
pub use refresh::{
    CONFIRM_BODY, CONFIRM_NOTE, EXEC_ROUTE, RefreshResult, RefreshTrigger, exec_refresh,
    exec_refresh_async,
};
pub use report::ComplianceRow;
