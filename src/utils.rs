// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::models::{RecurringInterval, TxKind};

/// Validate a `YYYY-MM-DD` date string at the entry boundary. Everything
/// past this point compares dates as raw strings, which stays correct only
/// for this zero-padded format.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_kind(s: &str) -> Result<TxKind> {
    match s {
        "income" => Ok(TxKind::Income),
        "expense" => Ok(TxKind::Expense),
        _ => Err(anyhow::anyhow!(
            "Invalid type '{}', expected income|expense",
            s
        )),
    }
}

pub fn parse_interval(s: &str) -> Result<RecurringInterval> {
    match s {
        "daily" => Ok(RecurringInterval::Daily),
        "weekly" => Ok(RecurringInterval::Weekly),
        "monthly" => Ok(RecurringInterval::Monthly),
        "yearly" => Ok(RecurringInterval::Yearly),
        _ => Err(anyhow::anyhow!(
            "Invalid interval '{}', expected daily|weekly|monthly|yearly",
            s
        )),
    }
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

/// Human display form of a stored date ("Jan 15, 2024"); unparseable
/// strings come back unchanged.
pub fn display_date(s: &str) -> String {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => s.to_string(),
    }
}

/// Month-over-month change in percent. None when there is no previous
/// value to compare against or the previous value is zero; the ratio is
/// never computed in that case.
pub fn percent_change(current: Decimal, previous: Option<Decimal>) -> Option<Decimal> {
    let previous = previous?;
    if previous.is_zero() {
        return None;
    }
    Some((current - previous) / previous * Decimal::from(100))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
