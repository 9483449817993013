// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(crate_version!())
        .about("Personal income/expense tracker with filters, reports, and CSV export")
        .subcommand(Command::new("init").about("Initialize the ledger file and print its path"))
        .subcommand(tx_cmd())
        .subcommand(category_cmd())
        .subcommand(report_cmd())
        .subcommand(export_cmd())
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Earliest date, inclusive"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Latest date, inclusive"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .value_parser(["income", "expense"])
            .help("Only entries of this type"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .help("Only entries with this exact category"),
    )
    .arg(
        Arg::new("search")
            .long("search")
            .help("Only entries whose description contains this text (case-insensitive)"),
    )
}

fn tx_entry_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .required(required),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .value_parser(["income", "expense"])
            .required(required),
    )
    .arg(Arg::new("amount").long("amount").required(required))
    .arg(Arg::new("category").long("category").required(required))
    .arg(
        Arg::new("description")
            .long("description")
            .required(required),
    )
    .arg(Arg::new("notes").long("notes"))
    .arg(
        Arg::new("recurring")
            .long("recurring")
            .action(ArgAction::SetTrue)
            .help("Mark as recurring (informational only)"),
    )
    .arg(
        Arg::new("interval")
            .long("interval")
            .value_parser(["daily", "weekly", "monthly", "yearly"])
            .help("Recurring interval"),
    )
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Record and list transactions")
        .subcommand(tx_entry_args(
            Command::new("add").about("Record an income or expense entry"),
            true,
        ))
        .subcommand(tx_entry_args(
            Command::new("edit")
                .about("Change fields of an existing entry")
                .arg(Arg::new("id").required(true)),
            false,
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete an entry")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(json_flags(filter_args(
            Command::new("list")
                .about("List entries, filtered and most recent first")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Keep at most this many rows"),
                ),
        )))
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Reference categories")
        .subcommand(json_flags(
            Command::new("list").about("List the reference categories"),
        ))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Aggregated views of the ledger")
        .subcommand(json_flags(
            Command::new("totals").about("Overall income, expenses, and balance"),
        ))
        .subcommand(json_flags(Command::new("monthly").about(
            "Per-month income/expenses for the last 12 recorded months",
        )))
        .subcommand(json_flags(
            Command::new("by-category")
                .about("Summed amounts per category for one type")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["income", "expense"])
                        .required(true),
                ),
        ))
}

fn export_cmd() -> Command {
    Command::new("export").about("Export to a file").subcommand(
        filter_args(
            Command::new("transactions")
                .about("Write the filtered transaction list to CSV or JSON")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        ),
    )
}
