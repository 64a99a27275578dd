// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rusqlite::Connection;
use serde_json::json;
use tracing::info;

use super::arg;
use crate::db;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = arg(sub, "format")?.to_lowercase();
    let out = arg(sub, "out")?;

    let state = db::load_state(conn)?;
    let mut rows = state.transactions.clone();
    rows.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "type",
                "store",
                "amount",
                "currency",
                "original_amount",
                "original_currency",
                "category",
                "note",
            ])?;
            for t in &rows {
                wtr.write_record([
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.store.clone(),
                    t.amount.to_string(),
                    t.currency.code.clone(),
                    t.original_amount.to_string(),
                    t.original_currency.code.clone(),
                    t.category.clone(),
                    t.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date, "type": t.r#type, "store": t.store,
                        "amount": t.amount.to_string(), "currency": t.currency.code,
                        "original_amount": t.original_amount.to_string(),
                        "original_currency": t.original_currency.code,
                        "category": t.category, "note": t.note
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    info!(count = rows.len(), format = %fmt, "exported transactions");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
