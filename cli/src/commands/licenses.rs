//! Licenses command: the unused-license drill-down for one tenant.

use anyhow::{Context as _, Result};
use bpa_business::{BusinessConfig, fetch_report_async, parse_license_records};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::output::Output;

#[derive(Tabled)]
struct LicenseRow {
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Purchased")]
    purchased: String,
    #[tabled(rename = "Consumed")]
    consumed: String,
}

#[instrument(skip_all, name = "licenses", fields(tenant = tenant.as_str()))]
pub async fn run_licenses(config: &BusinessConfig, tenant: String) -> Result<()> {
    let out = Output::new();

    let rows = fetch_report_async(config)
        .await
        .context("Failed to fetch the best-practice report")?;

    let Some(row) = rows
        .iter()
        .find(|row| row.tenant.eq_ignore_ascii_case(&tenant))
    else {
        out.error(format!("Tenant not found in the report: {tenant}"));
        std::process::exit(1);
    };

    let records = parse_license_records(row.unused_license_list.as_deref());
    if records.is_empty() {
        out.dim(format!("No unused licenses reported for {}.", row.tenant));
        return Ok(());
    }

    out.header(format!("SKUs with Unassigned Licenses: {}", row.tenant));
    let license_rows: Vec<LicenseRow> = records
        .into_iter()
        .map(|record| LicenseRow {
            sku: record.sku,
            purchased: record.purchased,
            consumed: record.consumed,
        })
        .collect();

    let mut table = Table::new(&license_rows);
    table.with(Style::rounded());
    out.newline();
    out.print(table.to_string());
    Ok(())
}
