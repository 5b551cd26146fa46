//! Pages module for the application.
//!
//! The console currently has a single page: the best-practice compliance
//! report with its drill-down modals and refresh action.

mod report_page;

pub use report_page::report_page;
