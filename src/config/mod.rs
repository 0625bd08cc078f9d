//! Configuration module
//!
//! Resolves command-line arguments and environment variables into the
//! settings of one export run.

pub mod settings;

pub use settings::{ExportSettings, LoggingSettings, OutputTarget};
