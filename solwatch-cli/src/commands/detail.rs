//! Detail command - real-time plant KPIs.

use anyhow::Result;
use clap::Args;
use solwatch_client::SolarClient;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the detail command.
#[derive(Args)]
pub struct DetailArgs {
    /// Station codes to query.
    #[arg(required = true)]
    pub stations: Vec<String>,
}

/// Runs the detail command.
pub async fn run(args: &DetailArgs, cli: &Cli, client: &SolarClient) -> Result<()> {
    let samples = client.get_plant_detail(&args.stations).await?;

    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).render(&samples)?),
        OutputFormat::Text => print!("{}", TextFormatter::new(!cli.no_color).kpis(&samples)),
    }
    Ok(())
}
