//! Watch command - poll a plant continuously.

use anyhow::{anyhow, Result};
use clap::Args;
use std::io::{stdout, Write};
use tokio::time::{interval, Duration};
use tracing::info;

use solwatch_client::{ClientError, SolarClient};

use crate::output::TextFormatter;
use crate::Cli;

/// Arguments for the watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Station code to watch. Defaults to the account's first plant.
    pub station: Option<String>,

    /// Refresh interval in seconds.
    #[arg(long, short, default_value = "60")]
    pub interval: u64,

    /// Minimum interval to use.
    #[arg(long, default_value = "30")]
    pub min_interval: u64,
}

/// Runs the watch command.
pub async fn run(args: &WatchArgs, cli: &Cli, client: &SolarClient) -> Result<()> {
    let refresh = args.interval.max(args.min_interval);

    let station = match &args.station {
        Some(code) => code.clone(),
        None => client
            .list_plants()
            .await?
            .first()
            .map(|p| p.station_code.clone())
            .ok_or_else(|| anyhow!("account has no plants to watch"))?,
    };

    info!(station = %station, interval = refresh, "starting watch mode");

    let formatter = TextFormatter::new(!cli.no_color);
    let cancel = client.cancel_handle();
    let mut ticker = interval(Duration::from_secs(refresh));

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                // Abort any backoff the client may be sitting in, then leave.
                cancel.cancel();
                break;
            }
        }

        // Clear screen
        print!("\x1b[2J\x1b[H");
        stdout().flush()?;

        let now = chrono::Local::now();
        println!(
            "Solwatch - {} - {} (refresh: {refresh}s)",
            station,
            now.format("%H:%M:%S")
        );
        println!("{}", "─".repeat(50));
        println!();

        match client.get_plant_detail(&[station.as_str()]).await {
            Ok(samples) => print!("{}", formatter.kpis(&samples)),
            Err(ClientError::Cancelled) => break,
            Err(e) => println!("fetch failed: {e}"),
        }

        println!();
        println!("Press Ctrl+C to exit");
    }

    Ok(())
}
