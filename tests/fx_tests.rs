// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centwise::calc::fx::{RateTable, find_currency};
use centwise::error::CalcError;
use centwise::models::{Currency, Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn ccy(code: &str) -> Currency {
    find_currency(code).unwrap_or_else(|| Currency::new(code, code, code))
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn builtin_rates_are_directed() {
    let t = RateTable::builtin();
    let usd_eur = t.convert(dec("100"), &ccy("USD"), &ccy("EUR")).unwrap();
    assert_eq!(format!("{:.2}", usd_eur), "85.00");
    let eur_usd = t.convert(dec("100"), &ccy("EUR"), &ccy("USD")).unwrap();
    assert_eq!(format!("{:.2}", eur_usd), "118.00");
    // Round trip is not 1 because each direction is quoted separately
    assert_ne!(dec("0.85") * dec("1.18"), Decimal::ONE);
}

#[test]
fn same_currency_is_identity_even_without_entry() {
    let t = RateTable::default();
    for amount in ["0", "12.345", "-7"] {
        let c = ccy("XYZ");
        assert_eq!(t.convert(dec(amount), &c, &c).unwrap(), dec(amount));
    }
}

#[test]
fn missing_pair_fails_even_when_reverse_exists() {
    let mut t = RateTable::default();
    t.set_rate("EUR", "USD", dec("1.10"));
    let err = t.convert(dec("10"), &ccy("USD"), &ccy("EUR")).unwrap_err();
    assert_eq!(
        err,
        CalcError::ConversionUnavailable {
            from: "USD".into(),
            to: "EUR".into()
        }
    );
    assert_eq!(err.to_string(), "no conversion rate from USD to EUR");
}

fn tx(id: &str, amount: &str, code: &str) -> Transaction {
    Transaction {
        id: id.into(),
        r#type: TransactionType::Expense,
        amount: dec(amount),
        original_amount: dec(amount),
        currency: ccy(code),
        original_currency: ccy(code),
        category: "Food".into(),
        store: "Market".into(),
        date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        note: None,
    }
}

#[test]
fn batch_conversion_starts_from_original_amount() {
    let t = RateTable::builtin();
    let mut item = tx("1", "10", "USD");
    // Simulate an earlier conversion into EUR
    item.amount = dec("8.5");
    item.currency = ccy("EUR");
    let out = t.convert_transactions(&[item], &ccy("USD")).unwrap();
    assert_eq!(out[0].amount, dec("10"));
    assert_eq!(out[0].currency.code, "USD");
    assert_eq!(out[0].original_currency.code, "USD");
}

#[test]
fn batch_conversion_is_all_or_nothing() {
    let t = RateTable::builtin();
    let items = vec![tx("1", "10", "USD"), tx("2", "5", "CHF")];
    let err = t.convert_transactions(&items, &ccy("GBP")).unwrap_err();
    assert!(matches!(err, CalcError::ConversionUnavailable { .. }));
}

#[test]
fn rate_table_lists_pairs() {
    let mut t = RateTable::default();
    assert!(t.is_empty());
    t.set_rate("usd", "eur", dec("0.9"));
    let pairs: Vec<_> = t.pairs().collect();
    assert_eq!(pairs, vec![("USD", "EUR", dec("0.9"))]);
}

#[test]
fn overflowing_conversion_is_an_error() {
    let t = RateTable::builtin();
    let err = t.convert(Decimal::MAX, &ccy("USD"), &ccy("JPY")).unwrap_err();
    assert_eq!(err, CalcError::out_of_range());
}
