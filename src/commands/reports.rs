// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::engine;
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, parse_kind, percent_change, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("totals", sub)) => totals(ledger, sub)?,
        Some(("monthly", sub)) => monthly(ledger, sub)?,
        Some(("by-category", sub)) => by_category(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn totals(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let t = engine::totals(ledger.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &t)? {
        let rows = vec![vec![
            fmt_money(&t.income),
            fmt_money(&t.expenses),
            fmt_money(&t.balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expenses", "Balance"], rows));
    }
    Ok(())
}

/// Render a month-over-month change, dash when there is nothing to
/// compare against.
fn fmt_change(current: Decimal, previous: Option<Decimal>) -> String {
    match percent_change(current, previous) {
        Some(pct) if pct >= Decimal::ZERO => format!("+{:.1}%", pct.round_dp(1)),
        Some(pct) => format!("{:.1}%", pct.round_dp(1)),
        None => "-".to_string(),
    }
}

fn monthly(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let series = engine::monthly_series(ledger.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let mut rows = Vec::new();
        let mut previous: Option<&crate::models::MonthlyBucket> = None;
        for bucket in &series {
            rows.push(vec![
                bucket.month.clone(),
                fmt_money(&bucket.income),
                fmt_change(bucket.income, previous.map(|p| p.income)),
                fmt_money(&bucket.expenses),
                fmt_change(bucket.expenses, previous.map(|p| p.expenses)),
                fmt_money(&bucket.balance),
            ]);
            previous = Some(bucket);
        }
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Chg", "Expenses", "Chg", "Balance"],
                rows,
            )
        );
    }
    Ok(())
}

fn by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let buckets = engine::category_breakdown(ledger.transactions(), kind);
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        let rows: Vec<Vec<String>> = buckets
            .iter()
            .map(|b| vec![b.name.clone(), fmt_money(&b.value)])
            .collect();
        let hdr = format!("{} total", kind.label());
        println!("{}", pretty_table(&["Category", &hdr], rows));
    }
    Ok(())
}
