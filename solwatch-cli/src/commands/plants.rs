//! Plants command - list the account's plants.

use anyhow::Result;
use solwatch_client::SolarClient;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the plants command.
pub async fn run(cli: &Cli, client: &SolarClient) -> Result<()> {
    let plants = client.list_plants().await?;
    info!(count = plants.len(), "fetched plant list");

    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).render(&plants)?),
        OutputFormat::Text => print!("{}", TextFormatter::new(!cli.no_color).plants(&plants)),
    }
    Ok(())
}
