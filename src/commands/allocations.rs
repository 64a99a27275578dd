// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use super::{arg, dispatch};
use crate::calc::allocation::total_percentage;
use crate::db;
use crate::state::Action;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = arg(sub, "id")?.to_string();
            dispatch(conn, Action::RemoveIncomeAllocation(id.clone()))?;
            println!("Removed allocation {}", id);
        }
        Some(("recompute", sub)) => {
            let income = parse_decimal(arg(sub, "income")?)?;
            let state = dispatch(conn, Action::RecomputeAllocations { total_income: income })?;
            println!(
                "Recomputed {} allocations from income {}",
                state.budget.income_allocations.len(),
                fmt_money(&income, &state.settings.currency)
            );
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let category = arg(sub, "category")?.to_string();
    let percentage = parse_decimal(arg(sub, "percentage")?)?;
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let state = dispatch(
        conn,
        Action::AddIncomeAllocation {
            category: category.clone(),
            amount,
            percentage,
        },
    )?;
    println!(
        "Allocated {}% to {} ({}% of income now allocated)",
        percentage,
        category,
        total_percentage(&state.budget.income_allocations)
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let items = &state.budget.income_allocations;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), items)? {
        let rows = items
            .iter()
            .map(|a| {
                vec![
                    a.id.clone(),
                    a.category.clone(),
                    format!("{}%", a.percentage),
                    fmt_money(&a.amount, &state.settings.currency),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Category", "Share", "Amount"], rows)
        );
    }
    Ok(())
}
