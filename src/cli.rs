// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn req(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).required(true).help(help)
}

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn named(verb: &'static str, about: &'static str) -> Command {
    Command::new(verb).about(about).arg(req("name", "Name"))
}

pub fn build_cli() -> Command {
    Command::new("centwise")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal finance: income allocation, savings goals, recurring items and budgets")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("init").about("Create the local store"))
        .subcommand(
            Command::new("alloc")
                .about("Income allocations")
                .subcommand(
                    Command::new("add")
                        .arg(req("category", "Budget category"))
                        .arg(req("percentage", "Share of income, 0-100"))
                        .arg(opt("amount", "Current amount").default_value("0")),
                )
                .subcommand(Command::new("list").args(json_flags()))
                .subcommand(Command::new("rm").arg(req("id", "Allocation id")))
                .subcommand(
                    Command::new("recompute")
                        .about("Recalculate amounts from total income")
                        .arg(req("income", "Total income")),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Goal name"))
                        .arg(req("target", "Target amount"))
                        .arg(req("date", "Target date YYYY-MM-DD"))
                        .arg(opt("current", "Already saved").default_value("0"))
                        .arg(opt("category", "Category").default_value("Savings")),
                )
                .subcommand(Command::new("list").args(json_flags()))
                .subcommand(
                    Command::new("contribute")
                        .arg(req("id", "Goal id"))
                        .arg(
                            req("amount", "Amount to add (negative to withdraw)")
                                .allow_negative_numbers(true),
                        ),
                )
                .subcommand(Command::new("rm").arg(req("id", "Goal id"))),
        )
        .subcommand(
            Command::new("recurring")
                .about("Recurring transactions")
                .subcommand(
                    Command::new("add")
                        .arg(req("type", "income|expense"))
                        .arg(req("amount", "Amount per occurrence"))
                        .arg(req("category", "Category"))
                        .arg(req("frequency", "daily|weekly|monthly|yearly"))
                        .arg(req("start", "Start date YYYY-MM-DD"))
                        .arg(opt("end", "End date YYYY-MM-DD")),
                )
                .subcommand(Command::new("list").args(json_flags()))
                .subcommand(Command::new("rm").arg(req("id", "Recurring id")))
                .subcommand(Command::new("summary").args(json_flags())),
        )
        .subcommand(
            Command::new("budget")
                .about("Per-category monthly budgets")
                .subcommand(
                    Command::new("set")
                        .about("Set a month's budget, replacing any previous amount")
                        .arg(req("category", "Category"))
                        .arg(req("amount", "Amount"))
                        .arg(opt("month", "YYYY-MM, defaults to current month")),
                )
                .subcommand(
                    Command::new("add")
                        .about("Add to a month's budget")
                        .arg(req("category", "Category"))
                        .arg(req("amount", "Amount"))
                        .arg(opt("month", "YYYY-MM, defaults to current month")),
                )
                .subcommand(
                    Command::new("show")
                        .arg(req("category", "Category"))
                        .arg(opt("month", "YYYY-MM or a prefix with --prefix"))
                        .arg(
                            Arg::new("prefix")
                                .long("prefix")
                                .action(ArgAction::SetTrue)
                                .help("Match the month as a prefix"),
                        ),
                )
                .subcommand(
                    Command::new("status")
                        .arg(opt("month", "YYYY-MM, defaults to current month"))
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("suggest")
                        .arg(req("category", "Category"))
                        .arg(opt("month", "Budget month to compare against")),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .arg(req("type", "income|expense"))
                        .arg(req("amount", "Amount in --currency"))
                        .arg(req("category", "Category"))
                        .arg(req("store", "Store or payee"))
                        .arg(opt("currency", "Entry currency, defaults to display currency"))
                        .arg(opt("date", "YYYY-MM-DD, defaults to today"))
                        .arg(opt("note", "Free-form note")),
                )
                .subcommand(
                    Command::new("list")
                        .arg(opt("month", "YYYY-MM"))
                        .arg(opt("category", "Category"))
                        .arg(opt("limit", "Max rows").value_parser(value_parser!(usize)))
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency and exchange rates")
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("set")
                        .about("Change display currency and convert all transactions")
                        .arg(req("code", "Currency code")),
                )
                .subcommand(
                    Command::new("convert")
                        .arg(req("amount", "Amount"))
                        .arg(req("from", "Currency code"))
                        .arg(req("to", "Currency code")),
                )
                .subcommand(
                    Command::new("set-rate")
                        .arg(req("from", "Currency code"))
                        .arg(req("to", "Currency code"))
                        .arg(req("rate", "Units of 'to' per one 'from'")),
                )
                .subcommand(Command::new("rates")),
        )
        .subcommand(
            Command::new("category")
                .about("Transaction categories")
                .subcommand(named("add", "Add a category"))
                .subcommand(Command::new("list"))
                .subcommand(named("rm", "Remove a category")),
        )
        .subcommand(
            Command::new("store")
                .about("Stores and payees")
                .subcommand(named("add", "Add a store"))
                .subcommand(Command::new("list"))
                .subcommand(named("rm", "Remove a store")),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly analytics")
                .subcommand(
                    Command::new("month")
                        .arg(opt("month", "YYYY-MM, defaults to current month"))
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("spend-by-category")
                        .arg(opt("month", "YYYY-MM, defaults to current month"))
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(opt("format", "csv|json").default_value("csv"))
                    .arg(req("out", "Output path")),
            ),
        )
        .subcommand(Command::new("reset").about("Delete all stored data"))
}
