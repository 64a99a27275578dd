// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centwise::calc::MAX_AMOUNT;
use centwise::calc::recurrence::{monthly_equivalent, recurring_monthly_totals};
use centwise::models::{Frequency, RecurringTransaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn monthly_is_identity() {
    for s in ["0", "1", "19.99", "123456.78"] {
        assert_eq!(monthly_equivalent(dec(s), &Frequency::Monthly), dec(s));
    }
}

#[test]
fn yearly_and_weekly_scaling() {
    for s in ["7", "13.5", "1200"] {
        let x = dec(s);
        assert_eq!(monthly_equivalent(x, &Frequency::Yearly), x / Decimal::from(12));
        assert_eq!(
            monthly_equivalent(x, &Frequency::Weekly),
            x * Decimal::from(52) / Decimal::from(12)
        );
    }
    assert_eq!(monthly_equivalent(dec("1200"), &Frequency::Weekly), dec("5200"));
    assert_eq!(monthly_equivalent(dec("1200"), &Frequency::Yearly), dec("100"));
}

#[test]
fn daily_uses_thirty_days() {
    assert_eq!(monthly_equivalent(dec("10"), &Frequency::Daily), dec("300"));
}

#[test]
fn unknown_frequency_passes_through() {
    let f = Frequency::from("fortnightly");
    assert_eq!(f, Frequency::Other("fortnightly".into()));
    assert_eq!(monthly_equivalent(dec("80"), &f), dec("80"));
}

#[test]
fn frequency_round_trips_through_json() {
    let item = RecurringTransaction {
        id: "r1".into(),
        r#type: TransactionType::Expense,
        amount: dec("50"),
        category: "Bills".into(),
        frequency: Frequency::Other("fortnightly".into()),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
    };
    let s = serde_json::to_string(&item).unwrap();
    assert!(s.contains("\"frequency\":\"fortnightly\""));
    assert!(s.contains("\"type\":\"expense\""));
    let back: RecurringTransaction = serde_json::from_str(&s).unwrap();
    assert_eq!(back, item);

    let weekly: Frequency = serde_json::from_str("\"Weekly\"").unwrap();
    assert_eq!(weekly, Frequency::Weekly);
}

#[test]
fn totals_split_income_and_expense() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mk = |t, amount: &str, f: Frequency| RecurringTransaction {
        id: amount.into(),
        r#type: t,
        amount: dec(amount),
        category: "x".into(),
        frequency: f,
        start_date: start,
        end_date: None,
    };
    let items = vec![
        mk(TransactionType::Income, "3000", Frequency::Monthly),
        mk(TransactionType::Income, "1200", Frequency::Yearly),
        mk(TransactionType::Expense, "12", Frequency::Weekly),
        mk(TransactionType::Expense, "5", Frequency::Daily),
    ];
    let totals = recurring_monthly_totals(&items);
    assert_eq!(totals.income, dec("3100"));
    assert_eq!(totals.expense, dec("52") + dec("150"));
    assert_eq!(totals.net(), dec("2898"));
}

#[test]
fn largest_accepted_amount_scales_without_overflow() {
    let max = Decimal::from(MAX_AMOUNT);
    assert_eq!(
        monthly_equivalent(max, &Frequency::Daily),
        max * Decimal::from(30)
    );
    assert_eq!(
        monthly_equivalent(max, &Frequency::Weekly),
        max * Decimal::from(52) / Decimal::from(12)
    );
}
