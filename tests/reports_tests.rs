// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centwise::calc::analytics::{budget_status, month_totals, spending_by_category, suggest_budget};
use centwise::calc::fx::default_currency;
use centwise::commands::goals::goal_rows;
use centwise::models::{CategoryBudgets, SavingsGoal, Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn tx(kind: TransactionType, amount: i64, category: &str, date: &str) -> Transaction {
    let ccy = default_currency();
    Transaction {
        id: format!("{}-{}", category, date),
        r#type: kind,
        amount: Decimal::from(amount),
        original_amount: Decimal::from(amount),
        currency: ccy.clone(),
        original_currency: ccy,
        category: category.to_string(),
        store: "Store".to_string(),
        date: d(date),
        note: None,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(TransactionType::Income, 5000, "Salary", "2024-03-01"),
        tx(TransactionType::Expense, 120, "Food", "2024-03-05"),
        tx(TransactionType::Expense, 80, "Food", "2024-03-20"),
        tx(TransactionType::Expense, 300, "Bills", "2024-03-10"),
        tx(TransactionType::Expense, 40, "Food", "2024-02-27"),
    ]
}

#[test]
fn month_totals_ignore_other_months() {
    let totals = month_totals(&sample(), "2024-03");
    assert_eq!(totals.income, Decimal::from(5000));
    assert_eq!(totals.expense, Decimal::from(500));
    assert_eq!(totals.balance(), Decimal::from(4500));
}

#[test]
fn spending_sorted_largest_first() {
    let spend = spending_by_category(&sample(), "2024-03");
    assert_eq!(
        spend,
        vec![
            ("Bills".to_string(), Decimal::from(300)),
            ("Food".to_string(), Decimal::from(200)),
        ]
    );
}

#[test]
fn status_covers_budgeted_and_spent_categories() {
    let mut budgets = CategoryBudgets::default();
    budgets.replace_budget("Food", Decimal::from(150), "2024-03");
    budgets.replace_budget("Fun", Decimal::from(50), "2024-03");

    let status = budget_status(&budgets, &sample(), "2024-03");
    let names: Vec<_> = status.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["Bills", "Food", "Fun"]);

    let food = &status[1];
    assert!(food.over_budget);
    assert_eq!(food.remaining, Decimal::from(-50));
    assert_eq!(food.used_percent.round_dp(2), Decimal::new(13333, 2));

    let bills = &status[0];
    assert_eq!(bills.budget, Decimal::ZERO);
    assert_eq!(bills.used_percent, Decimal::ZERO);

    let fun = &status[2];
    assert!(!fun.over_budget);
    assert_eq!(fun.remaining, Decimal::from(50));
}

#[test]
fn suggestion_is_average_expense() {
    let s = suggest_budget(&sample(), "Food", Decimal::from(100));
    assert_eq!(s.suggested_budget, Decimal::from(80));
    assert_eq!(s.percentage_change, Some(Decimal::from(-20)));

    let none = suggest_budget(&sample(), "Travel", Decimal::ZERO);
    assert_eq!(none.suggested_budget, Decimal::ZERO);
    assert_eq!(none.percentage_change, None);
}

#[test]
fn goal_rows_report_progress_and_monthly_need() {
    let goals = vec![SavingsGoal {
        id: "g1".into(),
        name: "Laptop".into(),
        target_amount: Decimal::from(1200),
        current_amount: Decimal::from(300),
        target_date: d("2024-10-01"),
        category: "Savings".into(),
    }];
    let rows = goal_rows(&goals, d("2024-01-01")).unwrap();
    assert_eq!(rows[0].progress, Decimal::from(25));
    assert_eq!(rows[0].monthly_needed, Decimal::from(100));
}

#[test]
fn goal_rows_reject_zero_target() {
    let goals = vec![SavingsGoal {
        id: "g1".into(),
        name: "Broken".into(),
        target_amount: Decimal::ZERO,
        current_amount: Decimal::ZERO,
        target_date: d("2024-10-01"),
        category: "Savings".into(),
    }];
    assert!(goal_rows(&goals, d("2024-01-01")).is_err());
}
