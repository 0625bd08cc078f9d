//! Export module
//!
//! Turns fetched row sets into the exported document:
//! - assembler: in-memory join of signups, trust edges and balances
//! - json: rendering and writing of the final document

pub mod assembler;
pub mod json;

pub use assembler::{build_snapshot, AssemblyReport, SafeGraph};
pub use json::{to_json_string, write_document};
