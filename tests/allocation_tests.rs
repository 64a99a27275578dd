// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centwise::calc::allocation::{allocate, percentage_of_income, total_percentage};
use centwise::error::CalcError;
use centwise::models::IncomeAllocation;
use rust_decimal::Decimal;

fn alloc(id: &str, category: &str, pct: &str) -> IncomeAllocation {
    IncomeAllocation {
        id: id.into(),
        category: category.into(),
        amount: Decimal::ZERO,
        percentage: pct.parse().unwrap(),
    }
}

#[test]
fn amounts_follow_percentages() {
    let input = vec![
        alloc("a", "Housing", "50"),
        alloc("b", "Food", "30"),
        alloc("c", "Savings", "20"),
    ];
    let out = allocate(Decimal::from(5000), &input).unwrap();
    let amounts: Vec<Decimal> = out.iter().map(|a| a.amount).collect();
    assert_eq!(
        amounts,
        vec![Decimal::from(2500), Decimal::from(1500), Decimal::from(1000)]
    );
    assert_eq!(out[1].id, "b");
    assert_eq!(out[1].category, "Food");
}

#[test]
fn partial_allocation_sums_to_share_of_income() {
    let input = vec![
        alloc("a", "Housing", "33.33"),
        alloc("b", "Food", "12.5"),
        alloc("c", "Fun", "4.17"),
    ];
    let income: Decimal = "4321.50".parse().unwrap();
    let out = allocate(income, &input).unwrap();
    let sum: Decimal = out.iter().map(|a| a.amount).sum();
    let expected = income * total_percentage(&input) / Decimal::ONE_HUNDRED;
    assert!((sum - expected).abs() < Decimal::new(1, 10));
}

#[test]
fn over_one_hundred_percent_is_rejected_without_touching_input() {
    let input = vec![alloc("a", "Housing", "60"), alloc("b", "Food", "40.01")];
    let before = input.clone();
    let err = allocate(Decimal::from(1000), &input).unwrap_err();
    assert_eq!(
        err,
        CalcError::Validation("total allocation percentage cannot exceed 100%".into())
    );
    assert_eq!(input, before);
}

#[test]
fn exactly_one_hundred_percent_is_allowed() {
    let input = vec![alloc("a", "Housing", "60"), alloc("b", "Food", "40")];
    let out = allocate(Decimal::from(1000), &input).unwrap();
    assert_eq!(out[0].amount, Decimal::from(600));
    assert_eq!(out[1].amount, Decimal::from(400));
}

#[test]
fn negative_income_and_out_of_range_share_are_rejected() {
    let input = vec![alloc("a", "Housing", "10")];
    assert!(matches!(
        allocate(Decimal::from(-1), &input),
        Err(CalcError::Validation(_))
    ));
    let bad = vec![alloc("a", "Housing", "-5")];
    assert!(matches!(
        allocate(Decimal::from(100), &bad),
        Err(CalcError::Validation(_))
    ));
}

#[test]
fn zero_income_gives_zero_amounts() {
    let out = allocate(Decimal::ZERO, &[alloc("a", "Food", "25")]).unwrap();
    assert!(out[0].amount.is_zero());
}

#[test]
fn percentage_of_income_handles_zero_income() {
    assert_eq!(
        percentage_of_income(Decimal::from(250), Decimal::from(1000)),
        Decimal::from(25)
    );
    assert!(percentage_of_income(Decimal::from(250), Decimal::ZERO).is_zero());
}

#[test]
fn overflowing_share_is_an_error() {
    let err = allocate(Decimal::MAX, &[alloc("a", "Savings", "50")]).unwrap_err();
    assert_eq!(err, CalcError::out_of_range());
}
