use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use stockreport_core::LocationId;
use stockreport_infra::InventorySnapshot;
use stockreport_plugin::{InMemorySettings, ReportTarget, StockSummaryReport};
use stockreport_summary::{END_DATE_KEY, START_DATE_KEY};

/// Environment prefix for settings, e.g. `STOCK_SUMMARY_START_DATE`.
const ENV_PREFIX: &str = "STOCK_SUMMARY_";

/// Render the stock summary context for a location from an inventory snapshot.
///
/// Dates default to `STOCK_SUMMARY_START_DATE` / `STOCK_SUMMARY_END_DATE`,
/// then to the plugin defaults.
#[derive(Debug, Parser)]
#[command(name = "stock-summary")]
#[command(version)]
#[command(about = "Stock movement summary for a location subtree", long_about = None)]
struct CliArgs {
    /// JSON inventory snapshot
    snapshot: PathBuf,

    /// Root stock location id
    location: LocationId,

    /// Window start, DD/MM/YYYY
    #[arg(long)]
    start: Option<String>,

    /// Window end, DD/MM/YYYY
    #[arg(long)]
    end: Option<String>,
}

fn main() -> anyhow::Result<()> {
    stockreport_observability::init();

    let args = CliArgs::parse();

    let inventory = InventorySnapshot::from_path(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?
        .into_inventory();

    let settings = InMemorySettings::from_env(ENV_PREFIX);
    if let Some(start) = args.start {
        settings.set(START_DATE_KEY, start);
    }
    if let Some(end) = args.end {
        settings.set(END_DATE_KEY, end);
    }

    let plugin = StockSummaryReport::new(&inventory, settings);
    let context = plugin
        .add_report_context(&ReportTarget::StockLocation(args.location))?
        .context("no report context produced")?;

    println!("{}", serde_json::to_string_pretty(&context.to_json()?)?);
    plugin.report_callback("stock-summary");
    Ok(())
}
