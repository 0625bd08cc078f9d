//! Resolved settings for one export run
//!
//! Command-line arguments (with their environment fallbacks already applied
//! by clap) are checked and turned into [`ExportSettings`] before any I/O.

use std::path::PathBuf;

use crate::cli::ExportArgs;
use crate::error::{ExportError, ExportResult};

/// Environment variable holding the connection string
pub const CONNECTION_STRING_ENV: &str = "BLOCKCHAIN_INDEX_DB_CONNECTION_STRING";

/// Environment variable that turns TLS off when set to a non-empty value
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV: &str = "SAFE_EXPORT_LOG";

/// Default log filter; negative balance warnings stay visible
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Where the document is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Diagnostic output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `safe_graph_export=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

/// Settings for one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub connection_string: String,
    /// Connect over TLS (required unless the connection string says otherwise)
    pub tls: bool,
    pub output: OutputTarget,
    pub pretty: bool,
    pub logging: LoggingSettings,
}

impl ExportSettings {
    /// Resolve settings from parsed arguments and the process environment
    pub fn from_args(args: &ExportArgs) -> ExportResult<Self> {
        Self::resolve(args, |name| std::env::var(name).ok())
    }

    /// Resolve settings, reading environment variables through `env`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither the argument nor
    /// `BLOCKCHAIN_INDEX_DB_CONNECTION_STRING` holds a non-blank connection
    /// string.
    pub fn resolve<F>(args: &ExportArgs, env: F) -> ExportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_string = non_blank(args.connection_string.clone())
            .or_else(|| non_blank(env(CONNECTION_STRING_ENV)))
            .ok_or_else(|| ExportError::Config("No connection string".into()))?;

        let debug = non_blank(env(DEBUG_ENV)).is_some();

        let output = match &args.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        };

        Ok(Self {
            connection_string,
            tls: !(args.no_tls || debug),
            output,
            pretty: args.pretty,
            logging: LoggingSettings {
                level: args.log_level.clone(),
                json: args.log_json,
            },
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
