//! Monthly command - monthly KPI series.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Args;
use solwatch_client::SolarClient;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the monthly command.
#[derive(Args)]
pub struct MonthlyArgs {
    /// Station codes to query.
    #[arg(required = true)]
    pub stations: Vec<String>,

    /// First month, YYYYMM. Defaults to the current month.
    #[arg(long)]
    pub start: Option<String>,

    /// Last month, YYYYMM. Defaults to the current month.
    #[arg(long)]
    pub end: Option<String>,
}

/// Runs the monthly command.
pub async fn run(args: &MonthlyArgs, cli: &Cli, client: &SolarClient) -> Result<()> {
    let current = chrono::Local::now().date_naive().with_day(1).unwrap_or_default();
    let start = match &args.start {
        Some(s) => parse_month(s)?,
        None => current,
    };
    let end = match &args.end {
        Some(s) => parse_month(s)?,
        None => current,
    };
    anyhow::ensure!(start <= end, "start month is after end month");

    let samples = client.get_monthly_series(&args.stations, start, end).await?;
    if samples.is_empty() && cli.format == OutputFormat::Text {
        println!("No monthly data available to this account.");
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).render(&samples)?),
        OutputFormat::Text => print!("{}", TextFormatter::new(!cli.no_color).kpis(&samples)),
    }
    Ok(())
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}01"), "%Y%m%d")
        .with_context(|| format!("invalid month '{s}', expected YYYYMM"))
}

// ============================================================================
// Tests
// ============================================================================
