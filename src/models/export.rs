//! Nested records of the exported document

use serde::Serialize;

/// A trust edge as written to the document
///
/// `limit` is always `null`; the raw limit travels as a string in
/// `limit_percentage` without any percentage being computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRelation {
    pub can_send_to_address: String,
    pub user_address: String,
    pub limit: (),
    pub limit_percentage: String,
}

/// Issuer of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenOwner {
    pub id: String,
}

/// Token reference inside a balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportToken {
    pub id: String,
    pub owner: TokenOwner,
}

/// A balance as written to the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportBalance {
    /// Exact decimal text from the database
    pub amount: String,
    pub token: ExportToken,
}

/// One safe with its edges and balances
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSafe {
    pub id: String,
    pub organization: bool,
    pub outgoing: Vec<ExportRelation>,
    pub incoming: Vec<ExportRelation>,
    pub balances: Vec<ExportBalance>,
}

/// Root of the exported document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    /// Latest indexed block, `null` for an empty ledger
    pub block_number: Option<i64>,
    pub safes: Vec<ExportSafe>,
}
