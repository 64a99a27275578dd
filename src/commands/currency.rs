// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use super::{arg, dispatch};
use crate::calc::fx::CURRENCIES;
use crate::db;
use crate::state::Action;
use crate::utils::{parse_currency, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => list_currencies(conn)?,
        Some(("set", sub)) => {
            let ccy = parse_currency(arg(sub, "code")?)?;
            let state = dispatch(conn, Action::SetCurrency(ccy.clone()))?;
            println!(
                "Display currency set to {} ({} transactions converted)",
                ccy.code,
                state.transactions.len()
            );
        }
        Some(("convert", sub)) => convert_amount(conn, sub)?,
        Some(("set-rate", sub)) => {
            let from = parse_currency(arg(sub, "from")?)?;
            let to = parse_currency(arg(sub, "to")?)?;
            let rate = parse_decimal(arg(sub, "rate")?)?;
            dispatch(
                conn,
                Action::SetRate {
                    from: from.code.clone(),
                    to: to.code.clone(),
                    rate,
                },
            )?;
            println!("1 {} = {} {}", from.code, rate, to.code);
        }
        Some(("rates", _)) => list_rates(conn)?,
        _ => {}
    }
    Ok(())
}

fn list_currencies(conn: &Connection) -> Result<()> {
    let display = db::load_state(conn)?.settings.currency;
    let data = CURRENCIES
        .iter()
        .map(|c| {
            vec![
                c.code.clone(),
                c.symbol.clone(),
                c.name.clone(),
                if c.code == display.code { "*" } else { "" }.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Code", "Symbol", "Name", "Display"], data)
    );
    Ok(())
}

fn list_rates(conn: &Connection) -> Result<()> {
    let state = db::load_state(conn)?;
    let data = state
        .fx_rates
        .pairs()
        .map(|(from, to, rate)| vec![from.to_string(), to.to_string(), rate.to_string()])
        .collect();
    println!("{}", pretty_table(&["From", "To", "Rate"], data));
    Ok(())
}

fn convert_amount(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let state = db::load_state(conn)?;
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let from = parse_currency(arg(sub, "from")?)?;
    let to = parse_currency(arg(sub, "to")?)?;
    let res = state.fx_rates.convert(amount, &from, &to)?;
    println!("{} {} -> {:.4} {}", amount, from.code, res, to.code);
    Ok(())
}
