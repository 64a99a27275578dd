// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use super::{arg, dispatch};
use crate::calc::analytics::{budget_status, suggest_budget};
use crate::calc::budgets::MatchPolicy;
use crate::db;
use crate::state::Action;
use crate::utils::{
    current_month, fmt_money, maybe_print_json, parse_decimal, parse_month, pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub, false)?,
        Some(("add", sub)) => set(conn, sub, true)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("status", sub)) => status(conn, sub)?,
        Some(("suggest", sub)) => suggest(conn, sub)?,
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

fn set(conn: &Connection, sub: &clap::ArgMatches, accumulate: bool) -> Result<()> {
    let month = month_arg(sub)?;
    let category = arg(sub, "category")?.to_string();
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let action = if accumulate {
        Action::AddToCategoryBudget {
            category: category.clone(),
            amount,
            month: month.clone(),
        }
    } else {
        Action::ReplaceCategoryBudget {
            category: category.clone(),
            amount,
            month: month.clone(),
        }
    };
    let state = dispatch(conn, action)?;
    let now = state
        .category_budgets
        .budget_for(&category, &month, MatchPolicy::Exact);
    println!(
        "Budget for {} / {} = {}",
        month,
        category,
        fmt_money(&now, &state.settings.currency)
    );
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let category = arg(sub, "category")?;
    let policy = if sub.get_flag("prefix") {
        MatchPolicy::Prefix
    } else {
        MatchPolicy::Exact
    };
    let month = match (sub.get_one::<String>("month"), policy) {
        (Some(m), MatchPolicy::Prefix) => m.trim().to_string(),
        (Some(m), MatchPolicy::Exact) => parse_month(m)?,
        (None, _) => current_month(),
    };
    let amount = state.category_budgets.budget_for(category, &month, policy);
    let rows = state
        .category_budgets
        .records(category)
        .iter()
        .map(|b| {
            vec![
                b.month.clone(),
                fmt_money(&b.amount, &state.settings.currency),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Budget"], rows));
    println!(
        "{} budget for {}: {}",
        category,
        month,
        fmt_money(&amount, &state.settings.currency)
    );
    Ok(())
}

fn status(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let month = month_arg(sub)?;
    let rows = budget_status(&state.category_budgets, &state.transactions, &month);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let ccy = &state.settings.currency;
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    fmt_money(&r.budget, ccy),
                    fmt_money(&r.spent, ccy),
                    format!("{:.1}%", r.used_percent),
                    fmt_money(&r.remaining, ccy),
                    if r.over_budget { "over" } else { "" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Category", "Budget", "Spent", "Used", "Remaining", ""],
                data
            )
        );
    }
    Ok(())
}

fn suggest(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let category = arg(sub, "category")?;
    let month = month_arg(sub)?;
    let current = state
        .category_budgets
        .budget_for(category, &month, MatchPolicy::Exact);
    let s = suggest_budget(&state.transactions, category, current);
    let change = s
        .percentage_change
        .map(|p| format!("{:+.1}%", p))
        .unwrap_or_else(|| "n/a".to_string());
    println!(
        "Suggested {} budget: {} (current {}, change {})",
        category,
        fmt_money(&s.suggested_budget, &state.settings.currency),
        fmt_money(&current, &state.settings.currency),
        change
    );
    Ok(())
}
