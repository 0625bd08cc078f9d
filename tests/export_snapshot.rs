use std::collections::HashSet;

use rust_decimal::Decimal;
use serde_json::{json, Value};

use safe_graph_export::export::{build_snapshot, to_json_string};
use safe_graph_export::models::{BalanceRow, RowSets, SignupRow, TrustRelationRow};

fn signup(address: &str, is_orga: bool) -> SignupRow {
    SignupRow {
        safe_address: address.to_string(),
        is_orga,
    }
}

fn trust(can_send_to: &str, user: &str, limit: Decimal) -> TrustRelationRow {
    TrustRelationRow {
        is_identity: can_send_to == user,
        can_send_to_address: can_send_to.to_string(),
        user_address: user.to_string(),
        limit,
    }
}

fn balance(holder: &str, token: &str, owner: &str, amount: &str) -> BalanceRow {
    BalanceRow {
        safe_address: holder.to_string(),
        token: token.to_string(),
        token_owner: owner.to_string(),
        amount: amount.to_string(),
    }
}

fn address(i: usize) -> String {
    format!("0x{:040x}", i)
}

/// A ring of safes where every safe trusts the next one and holds its own token
fn ring(size: usize) -> RowSets {
    let mut rows = RowSets {
        block_number: Some(25_000_000),
        ..RowSets::default()
    };
    for i in 0..size {
        let me = address(i);
        let next = address((i + 1) % size);
        rows.signups.push(signup(&me, i % 7 == 0));
        rows.outgoing_trusts.push(trust(&next, &me, Decimal::from(50)));
        rows.incoming_trusts.push(trust(&me, &next, Decimal::from(50)));
        if i % 3 != 0 {
            rows.balances.push(balance(&me, &format!("t{}", i), &me, "100000000000000000000"));
        }
    }
    rows
}

#[test]
fn single_incoming_trust_document() {
    let rows = RowSets {
        block_number: Some(10),
        signups: vec![signup("A", false)],
        incoming_trusts: vec![trust("A", "B", Decimal::from(5))],
        ..RowSets::default()
    };

    let (snapshot, _) = build_snapshot(&rows);
    let json = to_json_string(&snapshot, false).unwrap();

    assert_eq!(
        json,
        r#"{"blockNumber":10,"safes":[{"id":"A","organization":false,"outgoing":[],"incoming":[{"canSendToAddress":"A","userAddress":"B","limit":null,"limitPercentage":"5"}],"balances":[]}]}"#
    );
}

#[test]
fn negative_balance_is_exported_unchanged() {
    let rows = RowSets {
        block_number: Some(11),
        signups: vec![signup("A", false)],
        balances: vec![balance("A", "tA", "A", "-3")],
        ..RowSets::default()
    };

    let (snapshot, report) = build_snapshot(&rows);
    assert_eq!(report.negative_balances, 1);

    let value: Value = serde_json::from_str(&to_json_string(&snapshot, false).unwrap()).unwrap();
    assert_eq!(
        value["safes"][0]["balances"][0],
        json!({ "amount": "-3", "token": { "id": "tA", "owner": { "id": "A" } } })
    );
}

#[test]
fn every_signup_appears_exactly_once() {
    let mut rows = ring(500);
    // Rows for addresses that never signed up
    rows.balances.push(balance("0xstranger", "tX", "0xstranger", "1"));
    rows.incoming_trusts.push(trust("0xstranger", &address(0), Decimal::from(100)));

    let (snapshot, report) = build_snapshot(&rows);
    assert_eq!(report.safes, 500);

    let exported: Vec<&str> = snapshot.safes.iter().map(|s| s.id.as_str()).collect();
    let expected: Vec<String> = (0..500).map(address).collect();
    assert_eq!(exported, expected);

    let unique: HashSet<&str> = exported.iter().copied().collect();
    assert_eq!(unique.len(), 500);
    assert!(!unique.contains("0xstranger"));
}

#[test]
fn ring_edges_and_default_empty_balances() {
    let rows = ring(30);
    let (snapshot, _) = build_snapshot(&rows);

    for (i, safe) in snapshot.safes.iter().enumerate() {
        assert_eq!(safe.organization, i % 7 == 0);
        assert_eq!(safe.outgoing.len(), 1);
        assert_eq!(safe.outgoing[0].can_send_to_address, address((i + 1) % 30));
        assert_eq!(safe.incoming.len(), 1);
        assert_eq!(safe.incoming[0].user_address, address((i + 1) % 30));
        assert_eq!(safe.balances.is_empty(), i % 3 == 0);
    }
}

#[test]
fn same_rows_give_identical_bytes() {
    let rows = ring(200);
    let (first, _) = build_snapshot(&rows);
    let (second, _) = build_snapshot(&rows);

    assert_eq!(
        to_json_string(&first, false).unwrap(),
        to_json_string(&second, false).unwrap()
    );
}

#[test]
fn fractional_limits_render_as_plain_numbers() {
    let rows = RowSets {
        block_number: None,
        signups: vec![signup("A", true)],
        outgoing_trusts: vec![
            trust("B", "A", Decimal::new(10000, 2)),
            trust("C", "A", Decimal::new(335, 1)),
        ],
        ..RowSets::default()
    };

    let (snapshot, _) = build_snapshot(&rows);
    let value: Value = serde_json::from_str(&to_json_string(&snapshot, false).unwrap()).unwrap();

    assert_eq!(value["blockNumber"], Value::Null);
    assert_eq!(value["safes"][0]["outgoing"][0]["limitPercentage"], "100");
    assert_eq!(value["safes"][0]["outgoing"][1]["limitPercentage"], "33.5");
    assert_eq!(value["safes"][0]["outgoing"][1]["limit"], Value::Null);
}
