// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::DEFAULT_CATEGORIES;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &DEFAULT_CATEGORIES)? {
                let rows: Vec<Vec<String>> = DEFAULT_CATEGORIES
                    .iter()
                    .map(|c| {
                        vec![
                            c.name.to_string(),
                            c.kind.label().to_string(),
                            c.color.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Category", "Type", "Color"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
