//! safe-graph-export - trust graph and balance exporter
//!
//! This library reads a snapshot of the trust graph and the token balances
//! from an index database and turns it into one denormalized JSON document:
//! one record per signed-up safe with its outgoing and incoming trust edges
//! and its balances, plus the latest indexed block.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings resolution
//! - `error`: Custom error types
//! - `models`: Fetched rows and exported records
//! - `storage`: Concurrent fetch of the five row sets
//! - `grouping`: Generic `group_by` / `to_lookup` primitives
//! - `export`: In-memory join and JSON rendering
//! - `cli`: The export command
//! - `logging`: Diagnostics on stderr
//!
//! # Example
//!
//! ```rust,ignore
//! use safe_graph_export::export::{build_snapshot, to_json_string};
//! use safe_graph_export::storage::IndexDb;
//!
//! let db = IndexDb::connect(&connection_string).await?;
//! let rows = db.fetch_row_sets().await?;
//! let (snapshot, report) = build_snapshot(&rows);
//! let json = to_json_string(&snapshot, false)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod grouping;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{ExportError, ExportResult};
