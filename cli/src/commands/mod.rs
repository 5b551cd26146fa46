//! Command implementations for the Best Practice Analyser CLI.
//!
//! Each subcommand is implemented in its own module.

pub mod completions;
pub mod licenses;
pub mod report;
pub mod refresh;

pub use completions::generate_completions;
pub use licenses::run_licenses;
pub use report::run_report;
pub use refresh::run_refresh;
