#![allow(clippy::exit)]

mod cli;
mod commands;
mod output;
mod timing;

use anyhow::Result;
use bpa_business::BusinessConfig;
use clap::Parser as _;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    let config = match &cli.api_url {
        Some(url) => BusinessConfig::new(url.clone()),
        None => BusinessConfig::from_env(),
    };

    match cli.command {
        Commands::Report { json, csv, tenant } => {
            commands::run_report(&config, json, csv, tenant).await
        }
        Commands::Licenses { tenant } => commands::run_licenses(&config, tenant).await,
        Commands::Refresh { yes } => commands::run_refresh(&config, yes).await,
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}
