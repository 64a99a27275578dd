// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod allocations;
pub mod budgets;
pub mod categories;
pub mod currency;
pub mod exporter;
pub mod goals;
pub mod recurring;
pub mod reports;
pub mod transactions;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::db;
use crate::state::{Action, AppState, reduce};

/// Load state, apply one action, persist. Nothing is written when the action fails.
pub fn dispatch(conn: &Connection, action: Action) -> Result<AppState> {
    let mut state = db::load_state(conn)?;
    let name = action.name();
    reduce(&mut state, action).with_context(|| format!("Action '{}' rejected", name))?;
    db::save_state(conn, &state)?;
    Ok(state)
}

pub(crate) fn arg<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.trim())
        .with_context(|| format!("Missing --{}", name))
}
