// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centwise::{cli, commands::transactions, db};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    for (i, cat) in ["Food", "Transport", "Food"].iter().enumerate() {
        let day = format!("2025-01-0{}", i + 1);
        run(
            &conn,
            &[
                "tx", "add", "--type", "expense", "--amount", "10", "--category", cat, "--store",
                "P", "--date", &day,
            ],
        );
    }
    conn
}

fn run(conn: &Connection, args: &[&str]) {
    let mut argv = vec!["centwise"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(conn, tx_m).unwrap();
    } else {
        panic!("no tx subcommand");
    }
}

fn list_rows(conn: &Connection, args: &[&str]) -> Vec<transactions::TransactionRow> {
    let mut argv = vec!["centwise", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let tx_m = matches.subcommand_matches("tx").unwrap();
    let list_m = tx_m.subcommand_matches("list").unwrap();
    transactions::query_rows(conn, list_m).unwrap()
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    let rows = list_rows(&conn, &["--limit", "2"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_filters_by_category_and_month() {
    let conn = setup();
    assert_eq!(list_rows(&conn, &["--category", "Food"]).len(), 2);
    assert_eq!(list_rows(&conn, &["--month", "2025-01"]).len(), 3);
    assert!(list_rows(&conn, &["--month", "2025-02"]).is_empty());
}

#[test]
fn add_in_foreign_currency_stores_both_amounts() {
    let conn = setup();
    run(
        &conn,
        &[
            "tx", "add", "--type", "income", "--amount", "100", "--currency", "eur", "--category",
            "Salary", "--store", "Employer", "--date", "2025-01-10",
        ],
    );
    let state = db::load_state(&conn).unwrap();
    let t = &state.transactions[0];
    assert_eq!(t.original_currency.code, "EUR");
    assert_eq!(t.currency.code, "TRY");
    assert_eq!(t.amount, Decimal::from(3580));
}

#[test]
fn unknown_currency_is_rejected() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "centwise", "tx", "add", "--type", "expense", "--amount", "5", "--currency", "ABC",
        "--category", "Food", "--store", "P",
    ]);
    let tx_m = matches.subcommand_matches("tx").unwrap();
    assert!(transactions::handle(&conn, tx_m).is_err());
    assert_eq!(db::load_state(&conn).unwrap().transactions.len(), 3);
}

#[test]
fn month_filter_accepts_single_digit_month() {
    let conn = setup();
    assert_eq!(list_rows(&conn, &["--month", "2025-1"]).len(), 3);
}

#[test]
fn amount_beyond_range_is_rejected() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "centwise", "tx", "add", "--type", "expense", "--amount", "79228162514264337593543950335",
        "--currency", "USD", "--category", "Food", "--store", "P", "--date", "2025-01-05",
    ]);
    let tx_m = matches.subcommand_matches("tx").unwrap();
    let err = transactions::handle(&conn, tx_m).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert_eq!(db::load_state(&conn).unwrap().transactions.len(), 3);
}
