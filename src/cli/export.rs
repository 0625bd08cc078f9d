//! The export command
//!
//! Connects, fetches, assembles and writes the document. Nothing is written
//! to the output unless every earlier step succeeded.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::{CONNECTION_STRING_ENV, DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV};
use crate::config::{ExportSettings, OutputTarget};
use crate::error::{ExportError, ExportResult};
use crate::export::{build_snapshot, to_json_string, write_document, AssemblyReport};
use crate::storage::IndexDb;

/// Export arguments
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// PostgreSQL connection string of the index database
    #[arg(env = CONNECTION_STRING_ENV, hide_env_values = true)]
    pub connection_string: Option<String>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Connect without TLS (also when DEBUG is set)
    #[arg(long)]
    pub no_tls: bool,

    /// Log filter for diagnostics on stderr
    #[arg(long, env = LOG_LEVEL_ENV, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Emit diagnostics as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Run one export
pub async fn handle_export(settings: &ExportSettings) -> ExportResult<AssemblyReport> {
    let db = IndexDb::connect(&settings.connection_string, settings.tls).await?;
    let rows = db.fetch_row_sets().await?;

    let (snapshot, report) = build_snapshot(&rows);
    let json = to_json_string(&snapshot, settings.pretty)?;

    match &settings.output {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_document(&json, &mut writer)?;
        }
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|e| {
                ExportError::Io(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_document(&json, &mut writer)?;
            tracing::info!(path = %path.display(), "export written to file");
        }
    }

    tracing::info!(
        block_number = ?snapshot.block_number,
        safes = report.safes,
        safes_with_negative_balances = report.safes_with_negative_balances,
        negative_balances = report.negative_balances,
        "export complete"
    );

    Ok(report)
}
