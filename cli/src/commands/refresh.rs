//! Refresh command: force the analysis to run for all tenants.

use anyhow::{Context as _, Result};
use bpa_business::{BusinessConfig, CONFIRM_BODY, CONFIRM_NOTE, exec_refresh_async};
use inquire::Confirm;
use tracing::{info, instrument};

use crate::output::Output;

#[instrument(skip_all, name = "refresh", fields(yes))]
pub async fn run_refresh(config: &BusinessConfig, yes: bool) -> Result<()> {
    let out = Output::new();

    if !yes {
        let confirmed = Confirm::new(CONFIRM_BODY)
            .with_default(false)
            .with_help_message(CONFIRM_NOTE)
            .prompt()
            .context("Failed to read confirmation")?;
        if !confirmed {
            out.dim("Refresh not triggered.");
            return Ok(());
        }
    }

    info!("triggering forced best-practice analysis");
    match exec_refresh_async(config).await {
        Ok(()) => {
            out.success("Best Practice Analysis refresh triggered for all tenants.");
            Ok(())
        }
        Err(err) => {
            out.error(format!("Refresh failed: {err}"));
            std::process::exit(1);
        }
    }
}
