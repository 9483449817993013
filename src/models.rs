// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Capitalized label, used for export and table display.
    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Income => "Income",
            TxKind::Expense => "Expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// One recorded income or expense event. `date` is a zero-padded
/// `YYYY-MM-DD` string; ordering and month grouping compare it
/// lexicographically, which is only valid for that fixed-width format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recurring: bool,
    #[serde(
        rename = "recurringInterval",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recurring_interval: Option<RecurringInterval>,
}

/// Active filter constraints. Empty strings impose no bound; `kind: None`
/// matches both income and expense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub date_from: String,
    pub date_to: String,
    pub kind: Option<TxKind>,
    pub category: String,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Sums for one calendar month, keyed by `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Summed amount for one (kind, category) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub name: String,
    pub value: Decimal,
}

/// Reference category with a kind affinity and display color. Advisory
/// only: the engine never validates transaction categories against it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryDef {
    pub name: &'static str,
    pub kind: TxKind,
    pub color: &'static str,
}

pub const DEFAULT_CATEGORIES: &[CategoryDef] = &[
    CategoryDef { name: "Salary", kind: TxKind::Income, color: "#10B981" },
    CategoryDef { name: "Freelance", kind: TxKind::Income, color: "#8B5CF6" },
    CategoryDef { name: "Investment", kind: TxKind::Income, color: "#06B6D4" },
    CategoryDef { name: "Other Income", kind: TxKind::Income, color: "#84CC16" },
    CategoryDef { name: "Food & Dining", kind: TxKind::Expense, color: "#EF4444" },
    CategoryDef { name: "Transportation", kind: TxKind::Expense, color: "#F97316" },
    CategoryDef { name: "Shopping", kind: TxKind::Expense, color: "#EC4899" },
    CategoryDef { name: "Entertainment", kind: TxKind::Expense, color: "#8B5CF6" },
    CategoryDef { name: "Bills & Utilities", kind: TxKind::Expense, color: "#6B7280" },
    CategoryDef { name: "Healthcare", kind: TxKind::Expense, color: "#14B8A6" },
    CategoryDef { name: "Education", kind: TxKind::Expense, color: "#3B82F6" },
    CategoryDef { name: "Other Expenses", kind: TxKind::Expense, color: "#6B7280" },
];
