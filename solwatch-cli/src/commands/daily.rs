//! Daily command - daily KPI series.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::Args;
use solwatch_client::SolarClient;
use tracing::warn;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the daily command.
#[derive(Args)]
pub struct DailyArgs {
    /// Station codes to query.
    #[arg(required = true)]
    pub stations: Vec<String>,

    /// First day, YYYYMMDD. Defaults to a week ago.
    #[arg(long)]
    pub start: Option<String>,

    /// Last day, YYYYMMDD. Defaults to today.
    #[arg(long)]
    pub end: Option<String>,
}

/// Runs the daily command.
pub async fn run(args: &DailyArgs, cli: &Cli, client: &SolarClient) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let end = match &args.end {
        Some(s) => parse_day(s)?,
        None => today,
    };
    let start = match &args.start {
        Some(s) => parse_day(s)?,
        None => end.checked_sub_days(Days::new(6)).unwrap_or(end),
    };
    anyhow::ensure!(start <= end, "start day {start} is after end day {end}");

    let series = client.get_daily_series(&args.stations, start, end).await?;
    if series.is_synthetic() {
        warn!("vendor returned no history for this account; series is synthesized");
    }

    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).render(&series)?),
        OutputFormat::Text => print!("{}", TextFormatter::new(!cli.no_color).daily(&series)),
    }
    Ok(())
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .with_context(|| format!("invalid day '{s}', expected YYYYMMDD"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day("20260310").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
        );
        assert!(parse_day("2026-03-10").is_err());
        assert!(parse_day("20261301").is_err());
    }
}
