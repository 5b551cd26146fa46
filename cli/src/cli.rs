use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "bpa")]
#[command(about = "Best Practice Analyser console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the console API base URL (also: BPA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the per-tenant compliance report
    Report {
        /// Output the raw report as JSON
        #[arg(long)]
        json: bool,

        /// Output the rendered report as CSV
        #[arg(long, conflicts_with = "json")]
        csv: bool,

        /// Only show tenants whose name contains this text
        #[arg(long, short = 't')]
        tenant: Option<String>,
    },
    /// Show the unused-license drill-down for one tenant
    Licenses {
        /// Tenant name, as shown in the report
        tenant: String,
    },
    /// Force the Best Practice Analysis to run for all tenants
    Refresh {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
