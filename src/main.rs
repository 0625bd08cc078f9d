use anyhow::Result;
use clap::Parser;

use safe_graph_export::cli::{handle_export, ExportArgs};
use safe_graph_export::config::ExportSettings;
use safe_graph_export::logging;

#[derive(Parser)]
#[command(
    name = "safe-graph-export",
    version,
    about = "Export the trust graph and token balances as one JSON document",
    long_about = "Reads signups, trust edges and token balances from the index \
                  database and writes one JSON document with a record per safe \
                  to stdout. Diagnostics go to stderr."
)]
struct Cli {
    #[command(flatten)]
    export: ExportArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fail on missing configuration before touching the database
    let settings = ExportSettings::from_args(&cli.export)?;
    logging::init(&settings.logging)?;

    handle_export(&settings).await?;

    Ok(())
}
