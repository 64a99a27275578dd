// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::{arg, dispatch};
use crate::calc::recurrence::{monthly_equivalent, recurring_monthly_totals};
use crate::db;
use crate::models::{Frequency, TransactionType};
use crate::state::{Action, NewRecurring};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = arg(sub, "id")?.to_string();
            dispatch(conn, Action::RemoveRecurringTransaction(id.clone()))?;
            println!("Removed recurring transaction {}", id);
        }
        Some(("summary", sub)) => summary(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let raw_type = arg(sub, "type")?;
    let item = NewRecurring {
        r#type: TransactionType::parse(raw_type)
            .with_context(|| format!("Invalid type '{}', expected income|expense", raw_type))?,
        amount: parse_decimal(arg(sub, "amount")?)?,
        category: arg(sub, "category")?.to_string(),
        frequency: Frequency::from(arg(sub, "frequency")?),
        start_date: parse_date(arg(sub, "start")?)?,
        end_date: sub
            .get_one::<String>("end")
            .map(|s| parse_date(s))
            .transpose()?,
    };
    let desc = format!("{} {} {} ({})", item.frequency, item.r#type, item.amount, item.category);
    dispatch(conn, Action::AddRecurringTransaction(item))?;
    println!("Added recurring {}", desc);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let items = &state.budget.recurring_transactions;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), items)? {
        let ccy = &state.settings.currency;
        let rows = items
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    fmt_money(&t.amount, ccy),
                    t.frequency.to_string(),
                    fmt_money(&monthly_equivalent(t.amount, &t.frequency), ccy),
                    t.start_date.to_string(),
                    t.end_date.map(|d| d.to_string()).unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Type", "Category", "Amount", "Every", "Monthly", "Start", "End"],
                rows
            )
        );
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let totals = recurring_monthly_totals(&state.budget.recurring_transactions);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let ccy = &state.settings.currency;
        println!(
            "{}",
            pretty_table(
                &["Monthly income", "Monthly expense", "Net"],
                vec![vec![
                    fmt_money(&totals.income, ccy),
                    fmt_money(&totals.expense, ccy),
                    fmt_money(&totals.net(), ccy),
                ]]
            )
        );
    }
    Ok(())
}
