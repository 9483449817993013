// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

use crate::models::Transaction;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.tallybook", "Tallybook", "tallybook"));

pub fn ledger_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("transactions.json"))
}

/// The full transaction list, loaded from and saved to one JSON document.
/// Insertion assigns ids and enforces their uniqueness; the aggregation
/// layer treats the list as an immutable snapshot and never touches ids.
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn open_or_init() -> Result<Ledger> {
        Self::open(ledger_path()?)
    }

    /// Load the ledger at `path`, starting empty when the file does not
    /// exist yet.
    pub fn open(path: PathBuf) -> Result<Ledger> {
        let transactions = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Read ledger at {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Parse ledger at {}", path.display()))?
        } else {
            Vec::new()
        };
        Ok(Ledger { path, transactions })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Next free id: one past the highest numeric id already present.
    /// Ids stay opaque strings; numeric assignment is a ledger convention,
    /// not a contract anyone downstream may rely on.
    pub fn next_id(&self) -> String {
        let max = self
            .transactions
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    pub fn insert(&mut self, tx: Transaction) -> Result<()> {
        if self.transactions.iter().any(|t| t.id == tx.id) {
            bail!("Duplicate transaction id '{}'", tx.id);
        }
        self.transactions.push(tx);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Replace the entry with `tx.id` in place, keeping its position.
    pub fn update(&mut self, tx: Transaction) -> Result<()> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == tx.id)
            .with_context(|| format!("Transaction '{}' not found", tx.id))?;
        *slot = tx;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Transaction> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .with_context(|| format!("Transaction '{}' not found", id))?;
        Ok(self.transactions.remove(idx))
    }

    pub fn save(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.transactions)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Write ledger at {}", self.path.display()))?;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
