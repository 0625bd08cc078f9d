//! Data models for the exporter
//!
//! `rows` holds the flat records decoded from the index database, `export`
//! holds the nested records written to the JSON document.

pub mod export;
pub mod rows;

pub use export::{ExportBalance, ExportRelation, ExportSafe, ExportSnapshot, ExportToken, TokenOwner};
pub use rows::{BalanceRow, RowSets, SignupRow, TrustRelationRow};
