// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over the transaction list: totals, monthly series,
//! category breakdowns, and filtered views. Every function here is a fresh
//! computation over its input; nothing is cached and nothing is mutated.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{CategoryBucket, Filter, MonthlyBucket, Totals, Transaction, TxKind};

/// Buckets kept by `monthly_series`; older months are dropped.
const SERIES_MONTHS: usize = 12;

/// Apply `filter` and order the survivors by date descending, most recent
/// first. Same-date entries keep their input order (the sort is stable), so
/// repeated calls over the same snapshot render identically.
pub fn filter_and_sort(transactions: &[Transaction], filter: &Filter) -> Vec<Transaction> {
    let needle = filter.search.to_lowercase();
    let mut out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| {
            if !filter.date_from.is_empty() && t.date.as_str() < filter.date_from.as_str() {
                return false;
            }
            if !filter.date_to.is_empty() && t.date.as_str() > filter.date_to.as_str() {
                return false;
            }
            if let Some(kind) = filter.kind {
                if t.kind != kind {
                    return false;
                }
            }
            if !filter.category.is_empty() && t.category != filter.category {
                return false;
            }
            if !needle.is_empty() && !t.description.to_lowercase().contains(&needle) {
                return false;
            }
            true
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Sum income and expenses over the whole list. Amounts are summed as
/// given; nothing is clamped or rejected at this layer.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => expenses += t.amount,
        }
    }
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Per-month income/expense sums in chronological order, truncated to the
/// last [`SERIES_MONTHS`] distinct months. Months with no transactions do
/// not appear; no zero-filled buckets are synthesized.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let entry = map
            .entry(month_key(&t.date).to_string())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.kind {
            TxKind::Income => entry.0 += t.amount,
            TxKind::Expense => entry.1 += t.amount,
        }
    }
    let skip = map.len().saturating_sub(SERIES_MONTHS);
    map.into_iter()
        .skip(skip)
        .map(|(month, (income, expenses))| MonthlyBucket {
            month,
            income,
            expenses,
            balance: income - expenses,
        })
        .collect()
}

/// Summed amount per distinct category string among transactions of `kind`,
/// ordered by value descending with alphabetical tie-break. Category names
/// are compared raw; no normalization against the reference list.
pub fn category_breakdown(transactions: &[Transaction], kind: TxKind) -> Vec<CategoryBucket> {
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.kind == kind) {
        *map.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut out: Vec<CategoryBucket> = map
        .into_iter()
        .map(|(name, value)| CategoryBucket { name, value })
        .collect();
    out.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    out
}

/// The `YYYY-MM` prefix of a date string. A malformed date yields whatever
/// its first seven bytes are (or the whole string when shorter); the caller
/// validates dates at entry, not here.
fn month_key(date: &str) -> &str {
    date.get(..7).unwrap_or(date)
}
