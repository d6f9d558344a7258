// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Solwatch CLI - solar plant fleet monitoring from the command line.
//!
//! # Examples
//!
//! ```bash
//! # List the account's plants
//! solwatch plants
//!
//! # Real-time KPIs for one plant
//! solwatch detail S1
//!
//! # Last week of daily generation (synthesized when the account
//! # tier cannot read history; output says so)
//! solwatch daily S1
//!
//! # JSON output
//! solwatch --format json --pretty plants
//!
//! # Poll continuously
//! solwatch watch S1 --interval 60
//! ```
//!
//! Credentials come from `--account` / `--secret` or the
//! `SOLWATCH_ACCOUNT` / `SOLWATCH_SECRET` environment variables.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{daily, detail, device_kpi, devices, monthly, plants, watch};
use config::ClientSettings;
use solwatch_client::{ClientError, SolarClient};
use solwatch_core::VendorErrorKind;

// ============================================================================
// CLI Definition
// ============================================================================

/// Solwatch CLI - solar plant fleet monitoring.
#[derive(Parser)]
#[command(name = "solwatch")]
#[command(about = "Solar plant fleet monitoring CLI")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Account name. Falls back to SOLWATCH_ACCOUNT.
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Shared secret (system code). Falls back to SOLWATCH_SECRET.
    #[arg(long, global = true)]
    pub secret: Option<String>,

    /// Override the vendor base URL. Falls back to SOLWATCH_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the account's plants.
    #[command(visible_alias = "p")]
    Plants,

    /// Real-time KPIs for one or more plants.
    #[command(visible_alias = "d")]
    Detail(detail::DetailArgs),

    /// Daily KPI series for a day range.
    Daily(daily::DailyArgs),

    /// Monthly KPI series for a month range.
    Monthly(monthly::MonthlyArgs),

    /// List devices within one or more plants.
    Devices(devices::DevicesArgs),

    /// Real-time KPIs for devices.
    DeviceKpi(device_kpi::DeviceKpiArgs),

    /// Poll a plant continuously (like watch(1) for your roof).
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// The vendor rejected the credentials or account.
    AuthError = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("solwatch=debug,info")
    } else {
        EnvFilter::new("solwatch=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(exit_code_for(&e) as i32);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let settings = ClientSettings::resolve(cli)?;
    let client = SolarClient::with_config(
        settings.credentials,
        settings.base_url,
        settings.policy,
    )?;

    match &cli.command {
        Commands::Plants => plants::run(cli, &client).await,
        Commands::Detail(args) => detail::run(args, cli, &client).await,
        Commands::Daily(args) => daily::run(args, cli, &client).await,
        Commands::Monthly(args) => monthly::run(args, cli, &client).await,
        Commands::Devices(args) => devices::run(args, cli, &client).await,
        Commands::DeviceKpi(args) => device_kpi::run(args, cli, &client).await,
        Commands::Watch(args) => watch::run(args, cli, &client).await,
    }
}

/// Credential-class vendor failures exit distinctly so wrappers can tell
/// "fix your secret" from "try again later".
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if let Some(ClientError::Vendor { kind, .. }) = error.downcast_ref::<ClientError>() {
        if matches!(
            kind,
            VendorErrorKind::UnknownAccount
                | VendorErrorKind::BadCredential
                | VendorErrorKind::AccountLocked
                | VendorErrorKind::AccountExpired
        ) {
            return ExitCode::AuthError;
        }
    }
    ExitCode::Error
}
