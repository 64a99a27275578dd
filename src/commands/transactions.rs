// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;

use super::{arg, dispatch};
use crate::db;
use crate::models::{NewTransaction, TransactionType};
use crate::state::Action;
use crate::utils::{
    fmt_money, maybe_print_json, month_key, parse_currency, parse_date, parse_decimal,
    parse_month, pretty_table, today,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let raw_type = arg(sub, "type")?;
    let r#type = TransactionType::parse(raw_type)
        .with_context(|| format!("Invalid type '{}', expected income|expense", raw_type))?;
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let currency = match sub.get_one::<String>("currency") {
        Some(code) => parse_currency(code)?,
        None => db::load_state(conn)?.settings.currency,
    };
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let new = NewTransaction {
        r#type,
        amount,
        currency: currency.clone(),
        category: arg(sub, "category")?.to_string(),
        store: arg(sub, "store")?.to_string(),
        date,
        note: sub.get_one::<String>("note").map(|s| s.to_string()),
    };
    let state = dispatch(conn, Action::AddTransaction(new))?;
    if let Some(t) = state.transactions.first() {
        println!(
            "Recorded {} {} on {} at '{}' ({})",
            t.r#type,
            fmt_money(&t.original_amount, &currency),
            t.date,
            t.store,
            fmt_money(&t.amount, &t.currency)
        );
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    r.store.clone(),
                    r.amount.clone(),
                    r.original.clone(),
                    r.category.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Store", "Amount", "Entered as", "Category", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub store: String,
    pub amount: String,
    pub original: String,
    pub category: String,
    pub note: String,
}

/// Stored transactions filtered by `--month`, `--category` and `--limit`,
/// newest date first.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let state = db::load_state(conn)?;
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;
    let category = sub.get_one::<String>("category").map(|s| s.trim());
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let mut items: Vec<_> = state
        .transactions
        .iter()
        .filter(|t| month.as_deref().is_none_or(|m| month_key(t.date) == m))
        .filter(|t| category.is_none_or(|c| t.category == c))
        .collect();
    // Stable sort keeps insertion order (newest first) within a day
    items.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(items
        .into_iter()
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            store: t.store.clone(),
            amount: fmt_money(&t.amount, &t.currency),
            original: fmt_money(&t.original_amount, &t.original_currency),
            category: t.category.clone(),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect())
}
