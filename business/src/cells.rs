//! Cell rendering policies.
//!
//! Columns map raw report fields onto a small set of display-neutral cell
//! values; the egui table and the CLI table both render from these. The
//! fallback for anything absent or unexpected is the "No Data" badge.

/// Badge color semantics shared by both rendering surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Success,
    Danger,
    Warning,
    Info,
}

/// Which drill-down a clickable cell opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillDownKind {
    SharedMailboxes,
    UnusedLicenses,
    MessageCopy,
}

/// A rendered cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellDisplay {
    /// Plain pass-through text.
    Text(String),
    /// The "good" boolean state.
    Pass,
    /// The "bad" boolean state; `warning` softens danger to warning color.
    Fail { warning: bool },
    /// A labelled colored badge.
    Badge { label: String, color: BadgeColor },
    /// A percentage progress bar, 0..=100.
    Progress(f64),
    /// A clickable button opening a drill-down modal.
    DrillDown {
        label: String,
        kind: DrillDownKind,
    },
    /// Terminal fallback for absent or unexpected values.
    NoData,
}

/// Options for boolean cells.
///
/// `reverse` flips which boolean value counts as the good state (for fields
/// where `false` is the compliant answer). `warning` renders the bad state
/// in warning color instead of danger.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolPolicy {
    pub reverse: bool,
    pub warning: bool,
}

impl BoolPolicy {
    pub const PLAIN: Self = Self {
        reverse: false,
        warning: false,
    };
    pub const REVERSE: Self = Self {
        reverse: true,
        warning: false,
    };
    pub const WARNING: Self = Self {
        reverse: false,
        warning: true,
    };
    pub const REVERSE_WARNING: Self = Self {
        reverse: true,
        warning: true,
    };
}

/// Boolean cell: good state renders a check, bad state a cross.
pub fn bool_cell(value: Option<bool>, policy: BoolPolicy) -> CellDisplay {
    match value {
        Some(value) => {
            let good = if policy.reverse { !value } else { value };
            if good {
                CellDisplay::Pass
            } else {
                CellDisplay::Fail {
                    warning: policy.warning,
                }
            }
        }
        None => CellDisplay::NoData,
    }
}

/// Three-way self-service-password-reset cell.
pub fn sspr_cell(value: Option<&str>) -> CellDisplay {
    match value {
        Some("Off") => CellDisplay::Badge {
            label: "Off All Users".to_owned(),
            color: BadgeColor::Warning,
        },
        Some("On") => CellDisplay::Badge {
            label: "On All Users".to_owned(),
            color: BadgeColor::Success,
        },
        Some("Specific Users") => CellDisplay::Badge {
            label: "Specific Users".to_owned(),
            color: BadgeColor::Info,
        },
        _ => CellDisplay::NoData,
    }
}

/// Count-driven cell: zero is a pass, a positive count is a clickable
/// drill-down labelled with the pluralized count, anything else is No Data.
pub fn count_cell(count: Option<i64>, noun: &str, kind: DrillDownKind) -> CellDisplay {
    match count {
        Some(0) => CellDisplay::Pass,
        Some(count) if count > 0 => CellDisplay::DrillDown {
            label: pluralize(count as u64, noun),
            kind,
        },
        _ => CellDisplay::NoData,
    }
}

/// PASS/FAIL cell backed by a count: PASS renders a check, FAIL a
/// drill-down labelled with the count, anything else No Data.
pub fn status_count_cell(
    status: Option<&str>,
    count: Option<u64>,
    noun: &str,
    kind: DrillDownKind,
) -> CellDisplay {
    match status {
        Some("PASS") => CellDisplay::Pass,
        Some("FAIL") => CellDisplay::DrillDown {
            label: pluralize(count.unwrap_or(0), noun),
            kind,
        },
        _ => CellDisplay::NoData,
    }
}

/// Percentage cell. Zero or absent renders No Data: the analyser reports a
/// zero score only when it never managed to read one.
pub fn progress_cell(value: Option<f64>) -> CellDisplay {
    match value {
        Some(value) if value != 0.0 => CellDisplay::Progress(value),
        _ => CellDisplay::NoData,
    }
}

/// `1 User` / `2 Users`, `1 SKU` / `2 SKUs`.
pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
