//! The compliance table's column declarations.
//!
//! One entry per column, in display order, mapping a raw report field to a
//! cell policy. Both rendering surfaces iterate this table instead of
//! hard-coding columns.

use std::cmp::Ordering;

use crate::cells::{
    BoolPolicy, CellDisplay, DrillDownKind, bool_cell, count_cell, progress_cell, sspr_cell,
    status_count_cell,
};
use crate::delimited::{LicenseRecord, parse_license_records, parse_list};
use crate::report::ComplianceRow;

/// Which raw field a column reads and how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Tenant,
    LastRefresh,
    UnifiedAuditLog,
    SecureDefaults,
    MessageCopyForSendAs,
    AdminConsent,
    PasswordsNeverExpire,
    PrivacyInReports,
    SelfServicePasswordReset,
    ModernAuth,
    SharedMailboxLogins,
    UnusedLicenses,
    SecureScore,
}

/// One declared table column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub kind: ColumnKind,
}

/// The column set, in display order.
pub const fn columns() -> &'static [Column] {
    const COLUMNS: &[Column] = &[
        Column {
            title: "Tenant",
            kind: ColumnKind::Tenant,
        },
        Column {
            title: "Last Refresh",
            kind: ColumnKind::LastRefresh,
        },
        Column {
            title: "Unified Audit Log Enabled",
            kind: ColumnKind::UnifiedAuditLog,
        },
        Column {
            title: "Security Defaults Enabled",
            kind: ColumnKind::SecureDefaults,
        },
        Column {
            title: "Message Copy for Send As",
            kind: ColumnKind::MessageCopyForSendAs,
        },
        Column {
            title: "User Cannot Consent to Apps",
            kind: ColumnKind::AdminConsent,
        },
        Column {
            title: "Passwords Do Not Expire",
            kind: ColumnKind::PasswordsNeverExpire,
        },
        Column {
            title: "Privacy in Reports Enabled",
            kind: ColumnKind::PrivacyInReports,
        },
        Column {
            title: "Self Service Password Reset Enabled",
            kind: ColumnKind::SelfServicePasswordReset,
        },
        Column {
            title: "Modern Auth Enabled",
            kind: ColumnKind::ModernAuth,
        },
        Column {
            title: "Shared Mailboxes Logins Disabled",
            kind: ColumnKind::SharedMailboxLogins,
        },
        Column {
            title: "Unused Licenses",
            kind: ColumnKind::UnusedLicenses,
        },
        Column {
            title: "Secure Score",
            kind: ColumnKind::SecureScore,
        },
    ];
    COLUMNS
}

impl Column {
    /// Render this column's cell for one row.
    pub fn display(&self, row: &ComplianceRow) -> CellDisplay {
        match self.kind {
            ColumnKind::Tenant => CellDisplay::Text(row.tenant.clone()),
            ColumnKind::LastRefresh => match row.last_refresh_short() {
                Some(date) => CellDisplay::Text(date),
                None => CellDisplay::NoData,
            },
            ColumnKind::UnifiedAuditLog => bool_cell(row.unified_audit_log, BoolPolicy::PLAIN),
            ColumnKind::SecureDefaults => bool_cell(row.secure_default_state, BoolPolicy::WARNING),
            ColumnKind::MessageCopyForSendAs => status_count_cell(
                row.message_copy_for_send.as_deref(),
                row.message_copy_for_send_as_count,
                "User",
                DrillDownKind::MessageCopy,
            ),
            ColumnKind::AdminConsent => {
                bool_cell(row.admin_consent_for_applications, BoolPolicy::REVERSE)
            }
            ColumnKind::PasswordsNeverExpire => {
                bool_cell(row.do_not_expire_passwords, BoolPolicy::PLAIN)
            }
            ColumnKind::PrivacyInReports => {
                bool_cell(row.privacy_enabled, BoolPolicy::REVERSE_WARNING)
            }
            ColumnKind::SelfServicePasswordReset => {
                sspr_cell(row.self_service_password_reset.as_deref())
            }
            ColumnKind::ModernAuth => bool_cell(row.enable_modern_auth, BoolPolicy::PLAIN),
            ColumnKind::SharedMailboxLogins => count_cell(
                row.disabled_shared_mailbox_logins_count,
                "User",
                DrillDownKind::SharedMailboxes,
            ),
            ColumnKind::UnusedLicenses => status_count_cell(
                row.unused_licenses_result.as_deref(),
                row.unused_licenses_count,
                "SKU",
                DrillDownKind::UnusedLicenses,
            ),
            ColumnKind::SecureScore => progress_cell(row.secure_score_percentage),
        }
    }

    /// Compare two rows under this column, for sortable table headers.
    /// Absent values sort last in ascending order.
    pub fn cmp_rows(&self, a: &ComplianceRow, b: &ComplianceRow) -> Ordering {
        match self.kind {
            ColumnKind::Tenant => a.tenant.to_lowercase().cmp(&b.tenant.to_lowercase()),
            ColumnKind::LastRefresh => cmp_option(a.last_refresh_ts(), b.last_refresh_ts()),
            ColumnKind::UnifiedAuditLog => cmp_option(a.unified_audit_log, b.unified_audit_log),
            ColumnKind::SecureDefaults => {
                cmp_option(a.secure_default_state, b.secure_default_state)
            }
            ColumnKind::MessageCopyForSendAs => cmp_option(
                a.message_copy_for_send.as_deref(),
                b.message_copy_for_send.as_deref(),
            ),
            ColumnKind::AdminConsent => cmp_option(
                a.admin_consent_for_applications,
                b.admin_consent_for_applications,
            ),
            ColumnKind::PasswordsNeverExpire => {
                cmp_option(a.do_not_expire_passwords, b.do_not_expire_passwords)
            }
            ColumnKind::PrivacyInReports => cmp_option(a.privacy_enabled, b.privacy_enabled),
            ColumnKind::SelfServicePasswordReset => cmp_option(
                a.self_service_password_reset.as_deref(),
                b.self_service_password_reset.as_deref(),
            ),
            ColumnKind::ModernAuth => cmp_option(a.enable_modern_auth, b.enable_modern_auth),
            ColumnKind::SharedMailboxLogins => cmp_option(
                a.disabled_shared_mailbox_logins_count,
                b.disabled_shared_mailbox_logins_count,
            ),
            ColumnKind::UnusedLicenses => cmp_option(
                a.unused_licenses_count.filter(|_| failed(a)),
                b.unused_licenses_count.filter(|_| failed(b)),
            ),
            ColumnKind::SecureScore => cmp_f64(a.secure_score_percentage, b.secure_score_percentage),
        }
    }
}

fn failed(row: &ComplianceRow) -> bool {
    row.unused_licenses_result.as_deref() == Some("FAIL")
}

fn cmp_option<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// What a drill-down modal should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalRequest {
    /// A plain list of entries.
    List { title: String, items: Vec<String> },
    /// The unused-license table, keyed by SKU.
    Licenses {
        title: String,
        records: Vec<LicenseRecord>,
    },
}

impl ModalRequest {
    pub fn title(&self) -> &str {
        match self {
            Self::List { title, .. } | Self::Licenses { title, .. } => title,
        }
    }
}

/// Build the modal content for a drill-down click on `row`.
pub fn drill_down(kind: DrillDownKind, row: &ComplianceRow) -> ModalRequest {
    match kind {
        DrillDownKind::SharedMailboxes => ModalRequest::List {
            title: "Shared Mailboxes with Enabled User Accounts".to_owned(),
            items: parse_list(row.disabled_shared_mailbox_logins.as_deref()),
        },
        DrillDownKind::MessageCopy => ModalRequest::List {
            title: "Message Copy for Send As".to_owned(),
            items: parse_list(row.message_copy_for_send_as_list.as_deref()),
        },
        DrillDownKind::UnusedLicenses => ModalRequest::Licenses {
            title: "SKUs with Unassigned Licenses".to_owned(),
            records: parse_license_records(row.unused_license_list.as_deref()),
        },
    }
}
