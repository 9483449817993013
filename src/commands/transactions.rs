// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::engine;
use crate::models::{Filter, Transaction};
use crate::store::Ledger;
use crate::utils::{
    display_date, fmt_money, maybe_print_json, parse_date, parse_decimal, parse_interval,
    parse_kind, pretty_table,
};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

/// Build engine filter criteria from the shared `--from/--to/--type/
/// --category/--search` flags (used by both `tx list` and `export`).
pub fn criteria_from_matches(sub: &clap::ArgMatches) -> Result<Filter> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| parse_kind(s))
        .transpose()?;
    Ok(Filter {
        date_from: sub.get_one::<String>("from").cloned().unwrap_or_default(),
        date_to: sub.get_one::<String>("to").cloned().unwrap_or_default(),
        kind,
        category: sub
            .get_one::<String>("category")
            .cloned()
            .unwrap_or_default(),
        search: sub.get_one::<String>("search").cloned().unwrap_or_default(),
    })
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let notes = sub.get_one::<String>("notes").map(|s| s.to_string());
    let recurring = sub.get_flag("recurring");
    let interval = sub
        .get_one::<String>("interval")
        .map(|s| parse_interval(s))
        .transpose()?;

    let tx = Transaction {
        id: ledger.next_id(),
        kind,
        amount,
        category,
        description: description.clone(),
        date: date.format("%Y-%m-%d").to_string(),
        notes,
        recurring,
        recurring_interval: interval,
    };
    let id = tx.id.clone();
    ledger.insert(tx)?;
    ledger.save()?;
    println!(
        "Recorded {} {} on {} '{}' (id: {})",
        kind.as_str(),
        fmt_money(&amount),
        date,
        description,
        id
    );
    Ok(())
}

fn edit(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut tx = ledger
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Transaction '{}' not found", id))?;

    if let Some(d) = sub.get_one::<String>("date") {
        tx.date = parse_date(d)?.format("%Y-%m-%d").to_string();
    }
    if let Some(k) = sub.get_one::<String>("type") {
        tx.kind = parse_kind(k)?;
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        tx.amount = parse_decimal(a)?;
    }
    if let Some(c) = sub.get_one::<String>("category") {
        tx.category = c.to_string();
    }
    if let Some(d) = sub.get_one::<String>("description") {
        tx.description = d.to_string();
    }
    if let Some(n) = sub.get_one::<String>("notes") {
        tx.notes = Some(n.to_string());
    }
    if sub.get_flag("recurring") {
        tx.recurring = true;
    }
    if let Some(i) = sub.get_one::<String>("interval") {
        tx.recurring_interval = Some(parse_interval(i)?);
    }

    ledger.update(tx)?;
    ledger.save()?;
    println!("Updated transaction '{}'", id);
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let tx = ledger.remove(id)?;
    ledger.save()?;
    println!(
        "Removed {} {} '{}' (id: {})",
        tx.kind.as_str(),
        fmt_money(&tx.amount),
        tx.description,
        id
    );
    Ok(())
}

/// Filtered, most-recent-first view of the ledger; the display order and
/// inclusion rules are entirely the engine's.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let filter = criteria_from_matches(sub)?;
    let mut rows = engine::filter_and_sort(ledger.transactions(), &filter);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    display_date(&t.date),
                    t.kind.label().to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    fmt_money(&t.amount),
                    t.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Category", "Description", "Amount", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}
