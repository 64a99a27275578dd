// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;

use super::budgets::MatchPolicy;
use crate::models::{CategoryBudgets, Transaction, TransactionType};
use crate::utils::month_key;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthTotals {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthTotals {
    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }
}

fn in_month<'a>(items: &'a [Transaction], month: &'a str) -> impl Iterator<Item = &'a Transaction> {
    items.iter().filter(move |t| month_key(t.date) == month)
}

pub fn month_totals(items: &[Transaction], month: &str) -> MonthTotals {
    let mut totals = MonthTotals {
        month: month.to_string(),
        ..Default::default()
    };
    for t in in_month(items, month) {
        match t.r#type {
            TransactionType::Income => totals.income += t.amount,
            TransactionType::Expense => totals.expense += t.amount,
        }
    }
    totals
}

/// Expense totals per category for `month`, largest first.
pub fn spending_by_category(items: &[Transaction], month: &str) -> Vec<(String, Decimal)> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in in_month(items, month).filter(|t| t.r#type == TransactionType::Expense) {
        *agg.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut out: Vec<_> = agg.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    /// `spent / budget * 100`, unclamped; 0 when nothing is budgeted.
    pub used_percent: Decimal,
    pub remaining: Decimal,
    pub over_budget: bool,
}

/// Budget against actual spend for every category that has either a budget
/// record or an expense in `month`.
pub fn budget_status(
    budgets: &CategoryBudgets,
    items: &[Transaction],
    month: &str,
) -> Vec<BudgetStatus> {
    let spent_by_category: BTreeMap<String, Decimal> =
        spending_by_category(items, month).into_iter().collect();
    let categories: BTreeSet<&String> = budgets
        .budgets
        .keys()
        .chain(spent_by_category.keys())
        .collect();

    categories
        .into_iter()
        .map(|category| {
            let budget = budgets.budget_for(category, month, MatchPolicy::Exact);
            let spent = spent_by_category.get(category).copied().unwrap_or(Decimal::ZERO);
            let used_percent = if budget > Decimal::ZERO {
                spent / budget * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            BudgetStatus {
                category: category.clone(),
                budget,
                spent,
                used_percent,
                remaining: budget - spent,
                over_budget: spent > budget,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSuggestion {
    pub category: String,
    pub suggested_budget: Decimal,
    /// Change against the current budget in percent; `None` when there is no
    /// current budget to compare with.
    pub percentage_change: Option<Decimal>,
}

/// Suggest a budget equal to the average expense recorded for `category`.
pub fn suggest_budget(
    items: &[Transaction],
    category: &str,
    current_budget: Decimal,
) -> BudgetSuggestion {
    let amounts: Vec<Decimal> = items
        .iter()
        .filter(|t| t.category == category && t.r#type == TransactionType::Expense)
        .map(|t| t.amount)
        .collect();
    let average = if amounts.is_empty() {
        Decimal::ZERO
    } else {
        amounts.iter().sum::<Decimal>() / Decimal::from(amounts.len())
    };
    let percentage_change = (!current_budget.is_zero())
        .then(|| (average - current_budget) / current_budget * Decimal::ONE_HUNDRED);
    BudgetSuggestion {
        category: category.to_string(),
        suggested_budget: average,
        percentage_change,
    }
}
