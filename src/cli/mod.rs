//! CLI command handlers
//!
//! Bridges the clap argument parsing with the storage and export layers.

pub mod export;

pub use export::{handle_export, ExportArgs};
