// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::calc::allocation::percentage_of_income;
use crate::calc::analytics::{month_totals, spending_by_category};
use crate::db;
use crate::utils::{current_month, fmt_money, maybe_print_json, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(conn, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn month_arg(sub: &clap::ArgMatches) -> Result<String> {
    match sub.get_one::<String>("month") {
        Some(m) => parse_month(m),
        None => Ok(current_month()),
    }
}

fn month(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let month = month_arg(sub)?;
    let totals = month_totals(&state.transactions, &month);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let ccy = &state.settings.currency;
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expense", "Balance"],
                vec![vec![
                    totals.month.clone(),
                    fmt_money(&totals.income, ccy),
                    fmt_money(&totals.expense, ccy),
                    fmt_money(&totals.balance(), ccy),
                ]]
            )
        );
    }
    Ok(())
}

fn spend_by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let month = month_arg(sub)?;
    let income = month_totals(&state.transactions, &month).income;
    let ccy = &state.settings.currency;
    let data: Vec<Vec<String>> = spending_by_category(&state.transactions, &month)
        .into_iter()
        .map(|(cat, amt)| {
            vec![
                cat,
                fmt_money(&amt, ccy),
                format!("{:.1}%", percentage_of_income(amt, income)),
            ]
        })
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Of income"], data)
        );
    }
    Ok(())
}
