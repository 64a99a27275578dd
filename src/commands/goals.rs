// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{arg, dispatch};
use crate::calc::savings::{clamp_percent, monthly_contribution_needed, progress};
use crate::db;
use crate::models::SavingsGoal;
use crate::state::{Action, NewSavingsGoal};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table, today};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("contribute", sub)) => {
            let id = arg(sub, "id")?.to_string();
            let amount = parse_decimal(arg(sub, "amount")?)?;
            let state = dispatch(conn, Action::ContributeToGoal { id: id.clone(), amount })?;
            if let Some(g) = state.budget.savings_goals.iter().find(|g| g.id == id) {
                println!(
                    "{}: {} of {} saved",
                    g.name,
                    fmt_money(&g.current_amount, &state.settings.currency),
                    fmt_money(&g.target_amount, &state.settings.currency)
                );
            }
        }
        Some(("rm", sub)) => {
            let id = arg(sub, "id")?.to_string();
            dispatch(conn, Action::RemoveSavingsGoal(id.clone()))?;
            println!("Removed goal {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let goal = NewSavingsGoal {
        name: arg(sub, "name")?.to_string(),
        target_amount: parse_decimal(arg(sub, "target")?)?,
        current_amount: parse_decimal(arg(sub, "current")?)?,
        target_date: parse_date(arg(sub, "date")?)?,
        category: arg(sub, "category")?.to_string(),
    };
    let name = goal.name.clone();
    let target_date = goal.target_date;
    dispatch(conn, Action::AddSavingsGoal(goal))?;
    println!("Added goal '{}' due {}", name, target_date);
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct GoalRow {
    pub id: String,
    pub name: String,
    pub target: Decimal,
    pub saved: Decimal,
    pub progress: Decimal,
    pub target_date: NaiveDate,
    pub monthly_needed: Decimal,
}

/// Progress and required monthly saving for each goal as of `today`.
pub fn goal_rows(goals: &[SavingsGoal], today: NaiveDate) -> Result<Vec<GoalRow>> {
    goals
        .iter()
        .map(|g| {
            Ok(GoalRow {
                id: g.id.clone(),
                name: g.name.clone(),
                target: g.target_amount,
                saved: g.current_amount,
                progress: progress(g.current_amount, g.target_amount)?.round_dp(1),
                target_date: g.target_date,
                monthly_needed: monthly_contribution_needed(
                    g.target_amount,
                    g.current_amount,
                    g.target_date,
                    today,
                )
                .round_dp(2),
            })
        })
        .collect()
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let rows = goal_rows(&state.budget.savings_goals, today())?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let ccy = &state.settings.currency;
        let data = rows
            .iter()
            .map(|r| {
                let needed = if r.monthly_needed < Decimal::ZERO {
                    "met".to_string()
                } else {
                    fmt_money(&r.monthly_needed, ccy)
                };
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    fmt_money(&r.saved, ccy),
                    fmt_money(&r.target, ccy),
                    format!("{}%", clamp_percent(r.progress)),
                    r.target_date.to_string(),
                    needed,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Goal", "Saved", "Target", "Progress", "Due", "Per month"],
                data
            )
        );
    }
    Ok(())
}
