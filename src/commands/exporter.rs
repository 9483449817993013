// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::commands::transactions::criteria_from_matches;
use crate::engine;
use crate::store::Ledger;
use crate::utils::{display_date, fmt_money};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

/// Export the filtered, sorted view rather than the raw ledger, matching
/// what a listing with the same flags would show.
fn export_transactions(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let filter = criteria_from_matches(sub)?;
    let rows = engine::filter_and_sort(ledger.transactions(), &filter);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["Date", "Type", "Category", "Description", "Amount", "Notes"])?;
            for t in &rows {
                wtr.write_record([
                    display_date(&t.date),
                    t.kind.label().to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    fmt_money(&t.amount),
                    t.notes.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
