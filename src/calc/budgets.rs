// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::models::{CategoryBudgets, MonthlyBudget};

/// How a month key is matched against stored budget records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// `2024-03` only matches `2024-03`.
    #[default]
    Exact,
    /// `2024` matches `2024-03`; the first matching record wins.
    Prefix,
}

impl MatchPolicy {
    fn matches(self, stored: &str, wanted: &str) -> bool {
        match self {
            MatchPolicy::Exact => stored == wanted,
            MatchPolicy::Prefix => stored.starts_with(wanted),
        }
    }
}

/// Budget amount recorded for `month`, or zero when there is none.
pub fn get_budget_for_month(records: &[MonthlyBudget], month: &str, policy: MatchPolicy) -> Decimal {
    records
        .iter()
        .find(|b| policy.matches(&b.month, month))
        .map(|b| b.amount)
        .unwrap_or(Decimal::ZERO)
}

impl CategoryBudgets {
    pub fn records(&self, category: &str) -> &[MonthlyBudget] {
        self.budgets
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn budget_for(&self, category: &str, month: &str, policy: MatchPolicy) -> Decimal {
        get_budget_for_month(self.records(category), month, policy)
    }

    /// Set the budget for `(category, month)`, overwriting any previous amount.
    pub fn replace_budget(&mut self, category: &str, amount: Decimal, month: &str) {
        let record = self.record_mut(category, month);
        debug!(category, month, old = %record.amount, new = %amount, "replace budget");
        record.amount = amount;
    }

    /// Add `amount` on top of whatever is budgeted for `(category, month)`.
    /// An overflowing sum leaves the record untouched.
    pub fn add_to_budget(&mut self, category: &str, amount: Decimal, month: &str) -> CalcResult<()> {
        let record = self.record_mut(category, month);
        let next = record
            .amount
            .checked_add(amount)
            .ok_or_else(CalcError::out_of_range)?;
        debug!(category, month, old = %record.amount, delta = %amount, "add to budget");
        record.amount = next;
        Ok(())
    }

    /// Sum of every category's budget for `month`.
    pub fn total_for_month(&self, month: &str) -> Decimal {
        self.budgets
            .values()
            .map(|r| get_budget_for_month(r, month, MatchPolicy::Exact))
            .sum()
    }

    // Find-or-append keeps one record per (category, month).
    fn record_mut(&mut self, category: &str, month: &str) -> &mut MonthlyBudget {
        let records = self.budgets.entry(category.to_string()).or_default();
        let idx = match records.iter().position(|b| b.month == month) {
            Some(i) => i,
            None => {
                records.push(MonthlyBudget {
                    amount: Decimal::ZERO,
                    month: month.to_string(),
                });
                records.len() - 1
            }
        };
        &mut records[idx]
    }
}
