//! Device-kpi command - real-time device KPIs.

use anyhow::Result;
use clap::Args;
use solwatch_client::SolarClient;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the device-kpi command.
#[derive(Args)]
pub struct DeviceKpiArgs {
    /// Device ids to query.
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Vendor device-type id shared by the queried devices.
    #[arg(long)]
    pub dev_type: i64,
}

/// Runs the device-kpi command.
pub async fn run(args: &DeviceKpiArgs, cli: &Cli, client: &SolarClient) -> Result<()> {
    let samples = client.get_device_detail(&args.ids, args.dev_type).await?;

    match cli.format {
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).render(&samples)?),
        OutputFormat::Text => print!("{}", TextFormatter::new(!cli.no_color).kpis(&samples)),
    }
    Ok(())
}
