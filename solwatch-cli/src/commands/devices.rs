//! Devices command - list devices within plants.

use anyhow::Result;
use clap::Args;
use solwatch_client::SolarClient;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the devices command.
#[derive(Args)]
pub struct DevicesArgs {
    /// Station codes to query.
    #[arg(required = true)]
    pub stations: Vec<String>,
}

/// Runs the devices command.
pub async fn run(args: &DevicesArgs, cli: &Cli, client: &SolarClient) -> Result<()> {
    let devices = client.list_devices(&args.stations).await?;

    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).render(&devices)?),
        OutputFormat::Text => print!("{}", TextFormatter::new(!cli.no_color).devices(&devices)),
    }
    Ok(())
}
