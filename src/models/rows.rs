//! Flat rows as returned by the export queries
//!
//! One struct per query result. The fetch stage decodes database rows into
//! these types, so shape mismatches surface there and not during assembly.

use rust_decimal::Decimal;

/// One signed-up safe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRow {
    /// Address of the safe
    pub safe_address: String,
    /// True when the signup never issued a token
    pub is_orga: bool,
}

/// One directed trust edge
///
/// The same row type serves both the incoming and the outgoing query; the
/// query decides which side of the edge belongs to the exported safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustRelationRow {
    /// Truster and trustee are the same identity
    pub is_identity: bool,
    /// The safe that accepts tokens
    pub can_send_to_address: String,
    /// The safe whose tokens are accepted
    pub user_address: String,
    /// Raw trust limit
    pub limit: Decimal,
}

/// One token balance held by a safe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRow {
    /// Holder of the balance
    pub safe_address: String,
    /// Token id
    pub token: String,
    /// Address of the safe that issued the token
    pub token_owner: String,
    /// Exact decimal text, never parsed
    pub amount: String,
}

impl BalanceRow {
    /// Returns true if the amount is written with a leading minus sign
    pub fn is_negative(&self) -> bool {
        self.amount.starts_with('-')
    }
}

/// Everything the fetch stage returns for one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSets {
    /// Latest indexed block, `None` for an empty ledger
    pub block_number: Option<i64>,
    pub signups: Vec<SignupRow>,
    pub incoming_trusts: Vec<TrustRelationRow>,
    pub outgoing_trusts: Vec<TrustRelationRow>,
    pub balances: Vec<BalanceRow>,
}

impl RowSets {
    /// Total number of relational rows (the block number excluded)
    pub fn row_count(&self) -> usize {
        self.signups.len()
            + self.incoming_trusts.len()
            + self.outgoing_trusts.len()
            + self.balances.len()
    }
}
