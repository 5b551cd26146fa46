//! Report command: the full compliance table.

use anyhow::{Context as _, Result};
use bpa_business::{BusinessConfig, CellDisplay, ComplianceRow, columns, fetch_report_async};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::instrument;

use crate::output::Output;

/// Text rendering of one cell, shared by the table and CSV outputs.
pub fn cell_text(cell: &CellDisplay) -> String {
    match cell {
        CellDisplay::Text(text) => text.clone(),
        CellDisplay::Pass => "✔".to_owned(),
        CellDisplay::Fail { .. } => "✘".to_owned(),
        CellDisplay::Badge { label, .. } => label.clone(),
        CellDisplay::Progress(percentage) => format!("{percentage:.0}%"),
        CellDisplay::DrillDown { label, .. } => label.clone(),
        CellDisplay::NoData => "No Data".to_owned(),
    }
}

fn filter_rows(rows: Vec<ComplianceRow>, tenant: Option<&str>) -> Vec<ComplianceRow> {
    match tenant {
        Some(needle) => {
            let needle = needle.to_lowercase();
            rows.into_iter()
                .filter(|row| row.tenant.to_lowercase().contains(&needle))
                .collect()
        }
        None => rows,
    }
}

/// Quote a CSV field when it needs quoting.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Render the report in CSV form (the console's Best-Practices-Report
/// export).
pub fn to_csv(rows: &[ComplianceRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns()
            .iter()
            .map(|column| csv_field(column.title))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            columns()
                .iter()
                .map(|column| csv_field(&cell_text(&column.display(row))))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}

#[instrument(skip_all, name = "report", fields(json, csv, tenant = tenant.as_deref().unwrap_or("all")))]
pub async fn run_report(
    config: &BusinessConfig,
    json: bool,
    csv: bool,
    tenant: Option<String>,
) -> Result<()> {
    let out = Output::new();

    let rows = fetch_report_async(config)
        .await
        .context("Failed to fetch the best-practice report")?;
    let rows = filter_rows(rows, tenant.as_deref());

    if json {
        out.print(serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if csv {
        out.print(to_csv(&rows).trim_end());
        return Ok(());
    }

    if rows.is_empty() {
        out.dim("No tenants found.");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(columns().iter().map(|column| column.title.to_owned()));
    for row in &rows {
        builder.push_record(
            columns()
                .iter()
                .map(|column| cell_text(&column.display(row))),
        );
    }
    let mut table = builder.build();
    table.with(Style::rounded());

    out.newline();
    out.print(table.to_string());
    out.total("Total", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ComplianceRow {
        ComplianceRow {
            tenant: "contoso.example".to_owned(),
            unified_audit_log: Some(true),
            privacy_enabled: Some(true),
            secure_score_percentage: Some(61.5),
            disabled_shared_mailbox_logins_count: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_cell_text_variants() {
        assert_eq!(cell_text(&CellDisplay::Pass), "✔");
        assert_eq!(cell_text(&CellDisplay::Fail { warning: true }), "✘");
        assert_eq!(cell_text(&CellDisplay::Progress(61.5)), "62%");
        assert_eq!(cell_text(&CellDisplay::NoData), "No Data");
    }

    #[test]
    fn test_row_renders_through_columns() {
        let row = sample_row();
        let texts: Vec<String> = columns()
            .iter()
            .map(|column| cell_text(&column.display(&row)))
            .collect();
        assert_eq!(texts[0], "contoso.example");
        // Unified Audit Log is enabled.
        assert_eq!(texts[2], "✔");
        // Privacy in Reports is reverse: true is the bad state.
        assert_eq!(texts[7], "✘");
        // Shared mailbox drill-down shows the pluralized count.
        assert_eq!(texts[10], "2 Users");
        // Secure score renders as a percentage.
        assert_eq!(texts[12], "62%");
    }

    #[test]
    fn test_filter_rows_is_case_insensitive() {
        let rows = vec![sample_row(), ComplianceRow {
            tenant: "fabrikam.example".to_owned(),
            ..Default::default()
        }];
        let filtered = filter_rows(rows, Some("CONTOSO"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].tenant, "contoso.example");
    }

    #[tokio::test]
    async fn test_run_report_against_mock_server() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/BestPracticeAnalyser_List"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"Tenant": "contoso.example"}])),
            )
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        run_report(&config, true, false, None)
            .await
            .expect("report command succeeds");
    }

    #[test]
    fn test_csv_has_header_and_quoting() {
        let mut row = sample_row();
        row.tenant = "weird, \"tenant\"".to_owned();
        let csv = to_csv(&[row]);
        let mut lines = csv.lines();
        assert!(lines.next().expect("header").starts_with("Tenant,Last Refresh,"));
        assert!(
            lines
                .next()
                .expect("row")
                .starts_with("\"weird, \"\"tenant\"\"\",")
        );
    }
}
