//! The per-tenant compliance snapshot returned by the analyser API.
//!
//! Rows are loosely typed on purpose: the analyser job fills fields in as it
//! manages to collect them, so every field except the tenant name may be
//! absent. Absent values render as "No Data" rather than failing the row.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One tenant's best-practice snapshot, as served by
/// `GET /api/BestPracticeAnalyser_List`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplianceRow {
    #[serde(rename = "Tenant", default)]
    pub tenant: String,

    /// RFC 3339 timestamp of the last analyser run for this tenant.
    /// Kept as the raw string; display formatting parses on demand.
    #[serde(rename = "LastRefresh", default)]
    pub last_refresh: Option<String>,

    #[serde(rename = "UnifiedAuditLog", default)]
    pub unified_audit_log: Option<bool>,

    #[serde(rename = "SecureDefaultState", default)]
    pub secure_default_state: Option<bool>,

    /// PASS / FAIL status for message-copy-for-send-as.
    #[serde(rename = "MessageCopyForSend", default)]
    pub message_copy_for_send: Option<String>,

    #[serde(rename = "MessageCopyForSendAsCount", default)]
    pub message_copy_for_send_as_count: Option<u64>,

    /// Delimited list of mailboxes missing the message-copy setting.
    /// Older analyser builds emitted this under `MessageCopyForSendList`.
    #[serde(
        rename = "MessageCopyForSendAsList",
        alias = "MessageCopyForSendList",
        default
    )]
    pub message_copy_for_send_as_list: Option<String>,

    #[serde(rename = "AdminConsentForApplications", default)]
    pub admin_consent_for_applications: Option<bool>,

    #[serde(rename = "DoNotExpirePasswords", default)]
    pub do_not_expire_passwords: Option<bool>,

    #[serde(rename = "PrivacyEnabled", default)]
    pub privacy_enabled: Option<bool>,

    /// Off / On / Specific Users.
    #[serde(rename = "SelfServicePasswordReset", default)]
    pub self_service_password_reset: Option<String>,

    #[serde(rename = "EnableModernAuth", default)]
    pub enable_modern_auth: Option<bool>,

    #[serde(rename = "DisabledSharedMailboxLoginsCount", default)]
    pub disabled_shared_mailbox_logins_count: Option<i64>,

    /// Delimited list of shared mailboxes with sign-in still enabled.
    #[serde(rename = "DisabledSharedMailboxLogins", default)]
    pub disabled_shared_mailbox_logins: Option<String>,

    /// PASS / FAIL status for unused licenses.
    #[serde(rename = "UnusedLicensesResult", default)]
    pub unused_licenses_result: Option<String>,

    #[serde(rename = "UnusedLicensesCount", default)]
    pub unused_licenses_count: Option<u64>,

    /// Delimited record list of SKUs with unassigned seats.
    #[serde(rename = "UnusedLicenseList", default)]
    pub unused_license_list: Option<String>,

    #[serde(rename = "SecureScorePercentage", default)]
    pub secure_score_percentage: Option<f64>,
}

impl ComplianceRow {
    /// Short date form of the last refresh, e.g. `Mar 4 2026`.
    ///
    /// Returns `None` when the field is absent or not a parseable RFC 3339
    /// timestamp, which the cell layer treats as "No Data".
    pub fn last_refresh_short(&self) -> Option<String> {
        let raw = self.last_refresh.as_deref()?;
        let parsed = DateTime::parse_from_rfc3339(raw).ok()?;
        Some(parsed.format("%b %-d %Y").to_string())
    }

    /// The last refresh as a sortable timestamp; unparseable rows sort last.
    pub fn last_refresh_ts(&self) -> Option<i64> {
        let raw = self.last_refresh.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_row() {
        let row: ComplianceRow =
            serde_json::from_str(r#"{"Tenant": "contoso.example"}"#).expect("sparse row parses");
        assert_eq!(row.tenant, "contoso.example");
        assert!(row.last_refresh.is_none());
        assert!(row.unified_audit_log.is_none());
        assert!(row.secure_score_percentage.is_none());
    }

    #[test]
    fn test_deserialize_full_row() {
        let row: ComplianceRow = serde_json::from_str(
            r#"{
                "Tenant": "contoso.example",
                "LastRefresh": "2026-03-04T00:12:00Z",
                "UnifiedAuditLog": true,
                "SecureDefaultState": false,
                "MessageCopyForSend": "FAIL",
                "MessageCopyForSendAsCount": 2,
                "MessageCopyForSendAsList": "alice@contoso.example<br />bob@contoso.example",
                "SelfServicePasswordReset": "Specific Users",
                "DisabledSharedMailboxLoginsCount": 0,
                "UnusedLicensesResult": "PASS",
                "SecureScorePercentage": 61.5
            }"#,
        )
        .expect("full row parses");
        assert_eq!(row.message_copy_for_send.as_deref(), Some("FAIL"));
        assert_eq!(row.message_copy_for_send_as_count, Some(2));
        assert_eq!(row.disabled_shared_mailbox_logins_count, Some(0));
        assert_eq!(row.secure_score_percentage, Some(61.5));
    }

    #[test]
    fn test_message_copy_list_legacy_alias() {
        let row: ComplianceRow = serde_json::from_str(
            r#"{"Tenant": "t", "MessageCopyForSendList": "a@t<br />b@t"}"#,
        )
        .expect("legacy field parses");
        assert_eq!(
            row.message_copy_for_send_as_list.as_deref(),
            Some("a@t<br />b@t")
        );
    }

    #[test]
    fn test_last_refresh_short_format() {
        let row = ComplianceRow {
            last_refresh: Some("2026-03-04T00:12:00Z".to_string()),
            ..Default::default()
        };
        assert_eq!(row.last_refresh_short().as_deref(), Some("Mar 4 2026"));
    }

    #[test]
    fn test_last_refresh_unparseable_is_none() {
        let row = ComplianceRow {
            last_refresh: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(row.last_refresh_short().is_none());
        assert!(row.last_refresh_ts().is_none());
    }
}
