// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use super::{arg, dispatch};
use crate::db;
use crate::state::Action;
use crate::utils::pretty_table;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = arg(sub, "name")?.to_string();
            dispatch(conn, Action::AddCategory(name.clone()))?;
            println!("Added category '{}'", name);
        }
        Some(("list", _)) => {
            let settings = db::load_state(conn)?.settings;
            let data = settings.categories.into_iter().map(|c| vec![c]).collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("rm", sub)) => {
            let name = arg(sub, "name")?.to_string();
            dispatch(conn, Action::DeleteCategory(name.clone()))?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

pub fn handle_stores(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = arg(sub, "name")?.to_string();
            dispatch(conn, Action::AddStore(name.clone()))?;
            println!("Added store '{}'", name);
        }
        Some(("list", _)) => {
            let settings = db::load_state(conn)?.settings;
            let data = settings.stores.into_iter().map(|s| vec![s]).collect();
            println!("{}", pretty_table(&["Store"], data));
        }
        Some(("rm", sub)) => {
            let name = arg(sub, "name")?.to_string();
            dispatch(conn, Action::DeleteStore(name.clone()))?;
            println!("Removed store '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
