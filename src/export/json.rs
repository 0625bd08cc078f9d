//! JSON export of the safe graph
//!
//! The whole document is rendered to a string first; only a fully rendered
//! document is ever handed to a writer.

use std::io::Write;

use crate::error::{ExportError, ExportResult};
use crate::models::ExportSnapshot;

/// Render the snapshot as JSON text
pub fn to_json_string(snapshot: &ExportSnapshot, pretty: bool) -> ExportResult<String> {
    if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    }
    .map_err(|e| ExportError::Json(e.to_string()))
}

/// Write rendered JSON text to `writer` in one piece and flush it
pub fn write_document<W: Write>(json: &str, writer: &mut W) -> ExportResult<()> {
    writer
        .write_all(json.as_bytes())
        .map_err(|e| ExportError::Io(format!("Failed to write export: {}", e)))?;
    writer
        .flush()
        .map_err(|e| ExportError::Io(format!("Failed to flush export: {}", e)))?;

    tracing::debug!(bytes = json.len(), "export written");
    Ok(())
}
