//! Diagnostic logging setup
//!
//! All diagnostics go to stderr so stdout carries nothing but the document.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{ExportError, ExportResult};

/// Build the filter for the given settings
pub fn env_filter(settings: &LoggingSettings) -> ExportResult<EnvFilter> {
    EnvFilter::try_new(&settings.level).map_err(|e| {
        ExportError::Config(format!("Invalid log level '{}': {}", settings.level, e))
    })
}

/// Install the global subscriber
///
/// Calling this twice keeps the first subscriber.
pub fn init(settings: &LoggingSettings) -> ExportResult<()> {
    let filter = env_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
    Ok(())
}
