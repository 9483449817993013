// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tallybook::models::{Transaction, TxKind};
use tallybook::store::Ledger;
use tallybook::{cli, commands::exporter};
use tempfile::tempdir;

fn base_ledger(path: std::path::PathBuf) -> Ledger {
    let mut ledger = Ledger::open(path).unwrap();
    ledger
        .insert(Transaction {
            id: "1".to_string(),
            kind: TxKind::Expense,
            amount: "12.34".parse().unwrap(),
            category: "Food & Dining".to_string(),
            description: "Corner shop, downtown".to_string(),
            date: "2025-01-02".to_string(),
            notes: Some("Weekly run".to_string()),
            recurring: false,
            recurring_interval: None,
        })
        .unwrap();
    ledger
        .insert(Transaction {
            id: "2".to_string(),
            kind: TxKind::Income,
            amount: "1000".parse().unwrap(),
            category: "Salary".to_string(),
            description: "January pay".to_string(),
            date: "2025-01-15".to_string(),
            notes: None,
            recurring: true,
            recurring_interval: Some(tallybook::models::RecurringInterval::Monthly),
        })
        .unwrap();
    ledger
}

fn run_export(ledger: &Ledger, args: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(ledger, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn csv_export_quotes_embedded_delimiters() {
    let dir = tempdir().unwrap();
    let ledger = base_ledger(dir.path().join("transactions.json"));
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &ledger,
        &["tallybook", "export", "transactions", "--out", &out_str],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Type,Category,Description,Amount,Notes"
    );
    // most recent first, same order as tx list
    assert_eq!(
        lines.next().unwrap(),
        "\"Jan 15, 2025\",Income,Salary,January pay,1000.00,"
    );
    assert_eq!(
        lines.next().unwrap(),
        "\"Jan 2, 2025\",Expense,Food & Dining,\"Corner shop, downtown\",12.34,Weekly run"
    );
    assert!(lines.next().is_none());
}

#[test]
fn csv_export_honors_filter_flags() {
    let dir = tempdir().unwrap();
    let ledger = base_ledger(dir.path().join("transactions.json"));
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &ledger,
        &[
            "tallybook",
            "export",
            "transactions",
            "--type",
            "expense",
            "--out",
            &out_str,
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(!contents.contains("Salary"));
}

#[test]
fn json_export_keeps_the_document_field_names() {
    let dir = tempdir().unwrap();
    let ledger = base_ledger(dir.path().join("transactions.json"));
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &ledger,
        &[
            "tallybook",
            "export",
            "transactions",
            "--format",
            "json",
            "--out",
            &out_str,
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "income");
    assert_eq!(items[0]["recurringInterval"], "monthly");
    assert_eq!(items[1]["date"], "2025-01-02");
    assert_eq!(items[1]["notes"], "Weekly run");
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let ledger = base_ledger(dir.path().join("transactions.json"));
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let err = run_export(
        &ledger,
        &[
            "tallybook",
            "export",
            "transactions",
            "--format",
            "xml",
            "--out",
            &out_str,
        ],
    );
    assert!(err.is_err());
    assert!(!out_path.exists());
}
