//! Safe graph assembly
//!
//! Joins the fetched row sets in memory: the signup lookup drives iteration
//! and the three groupings supply each safe's edges and balances. Rows whose
//! address is not a signup are never reached.

use rust_decimal::Decimal;

use crate::grouping::{group_by, to_lookup, Grouping, Lookup};
use crate::models::{
    BalanceRow, ExportBalance, ExportRelation, ExportSafe, ExportSnapshot, ExportToken, RowSets,
    TokenOwner, TrustRelationRow,
};

/// Number of assembled safes between two progress events
const PROGRESS_INTERVAL: usize = 10_000;

/// Counters collected while assembling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Safes written to the document
    pub safes: usize,
    /// Safes holding at least one negative balance
    pub safes_with_negative_balances: usize,
    /// Negative balance rows across all safes
    pub negative_balances: usize,
}

/// The fetched row sets, indexed by safe address
pub struct SafeGraph<'a> {
    safes: Lookup<&'a str, bool>,
    incoming: Grouping<'a, &'a str, TrustRelationRow>,
    outgoing: Grouping<'a, &'a str, TrustRelationRow>,
    balances: Grouping<'a, &'a str, BalanceRow>,
}

impl<'a> SafeGraph<'a> {
    /// Index the row sets by safe address
    pub fn index(rows: &'a RowSets) -> Self {
        let safes = to_lookup(
            &rows.signups,
            |s| Some(s.safe_address.as_str()),
            |s| s.is_orga,
        );
        let incoming = group_by(&rows.incoming_trusts, |t| Some(t.can_send_to_address.as_str()));
        let outgoing = group_by(&rows.outgoing_trusts, |t| Some(t.user_address.as_str()));
        let balances = group_by(&rows.balances, |b| Some(b.safe_address.as_str()));

        tracing::debug!(
            safes = safes.len(),
            with_incoming = incoming.len(),
            with_outgoing = outgoing.len(),
            with_balances = balances.len(),
            "indexed row sets"
        );

        Self {
            safes,
            incoming,
            outgoing,
            balances,
        }
    }

    /// Build one record per safe, in signup order
    pub fn assemble(&self) -> (Vec<ExportSafe>, AssemblyReport) {
        let mut report = AssemblyReport::default();
        let mut safes = Vec::with_capacity(self.safes.len());

        for (&address, &is_orga) in self.safes.iter() {
            if safes.len() % PROGRESS_INTERVAL == 0 {
                tracing::debug!(constructed = safes.len(), "assembling safes");
            }

            let outgoing = rows_for(&self.outgoing, address);
            let incoming = rows_for(&self.incoming, address);
            let balances = rows_for(&self.balances, address);

            let negative: Vec<&BalanceRow> =
                balances.iter().copied().filter(|b| b.is_negative()).collect();
            if !negative.is_empty() {
                tracing::warn!(
                    safe = address,
                    balances = ?negative,
                    "safe holds negative balances"
                );
                report.safes_with_negative_balances += 1;
                report.negative_balances += negative.len();
            }

            safes.push(ExportSafe {
                id: address.to_string(),
                organization: is_orga,
                outgoing: outgoing.iter().map(|t| export_relation(t)).collect(),
                incoming: incoming.iter().map(|t| export_relation(t)).collect(),
                balances: balances.iter().map(|b| export_balance(b)).collect(),
            });
        }

        report.safes = safes.len();
        (safes, report)
    }
}

/// Index and assemble the row sets into the exported document
pub fn build_snapshot(rows: &RowSets) -> (ExportSnapshot, AssemblyReport) {
    let (safes, report) = SafeGraph::index(rows).assemble();
    let snapshot = ExportSnapshot {
        block_number: rows.block_number,
        safes,
    };
    (snapshot, report)
}

fn rows_for<'g, 'a, T>(grouping: &'g Grouping<'a, &'a str, T>, address: &str) -> &'g [&'a T] {
    grouping.get(address).map(Vec::as_slice).unwrap_or(&[])
}

fn export_relation(row: &TrustRelationRow) -> ExportRelation {
    ExportRelation {
        can_send_to_address: row.can_send_to_address.clone(),
        user_address: row.user_address.clone(),
        limit: (),
        limit_percentage: limit_string(&row.limit),
    }
}

fn export_balance(row: &BalanceRow) -> ExportBalance {
    ExportBalance {
        amount: row.amount.clone(),
        token: ExportToken {
            id: row.token.clone(),
            owner: TokenOwner {
                id: row.token_owner.clone(),
            },
        },
    }
}

/// Plain string form of a limit: no exponent, no trailing fractional zeros
fn limit_string(limit: &Decimal) -> String {
    limit.normalize().to_string()
}
