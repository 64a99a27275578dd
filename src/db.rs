// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::calc::fx::RateTable;
use crate::state::AppState;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Centwise", "centwise"));

pub const KEY_TRANSACTIONS: &str = "@transactions";
pub const KEY_CATEGORY_BUDGETS: &str = "@category_budgets";
pub const KEY_BUDGET: &str = "@budget";
pub const KEY_SETTINGS: &str = "@settings";
pub const KEY_FX_RATES: &str = "@fx_rates";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("centwise.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    debug!(path = %path.display(), "store opened");
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

pub fn get_slice<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    match raw {
        Some(s) => {
            let v = serde_json::from_str(&s)
                .with_context(|| format!("Malformed JSON stored under '{}'", key))?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

pub fn put_slice<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let s = serde_json::to_string(value)
        .with_context(|| format!("Serialize state for '{}'", key))?;
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
        params![key, s],
    )?;
    Ok(())
}

/// Load every slice, falling back to defaults for keys never written.
pub fn load_state(conn: &Connection) -> Result<AppState> {
    let state = AppState {
        transactions: get_slice(conn, KEY_TRANSACTIONS)?.unwrap_or_default(),
        category_budgets: get_slice(conn, KEY_CATEGORY_BUDGETS)?.unwrap_or_default(),
        budget: get_slice(conn, KEY_BUDGET)?.unwrap_or_default(),
        settings: get_slice(conn, KEY_SETTINGS)?.unwrap_or_default(),
        fx_rates: get_slice(conn, KEY_FX_RATES)?.unwrap_or_else(RateTable::builtin),
    };
    debug!(
        transactions = state.transactions.len(),
        goals = state.budget.savings_goals.len(),
        "state loaded"
    );
    Ok(state)
}

/// Write every slice in one transaction.
pub fn save_state(conn: &Connection, state: &AppState) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    put_slice(&tx, KEY_TRANSACTIONS, &state.transactions)?;
    put_slice(&tx, KEY_CATEGORY_BUDGETS, &state.category_budgets)?;
    put_slice(&tx, KEY_BUDGET, &state.budget)?;
    put_slice(&tx, KEY_SETTINGS, &state.settings)?;
    put_slice(&tx, KEY_FX_RATES, &state.fx_rates)?;
    tx.commit().context("Commit state")?;
    debug!("state saved");
    Ok(())
}

pub fn clear_all(conn: &Connection) -> Result<()> {
    let n = conn.execute("DELETE FROM kv", [])?;
    info!(slices = n, "store cleared");
    Ok(())
}
