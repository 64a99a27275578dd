// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::models::{Frequency, RecurringTransaction, TransactionType};

const DAYS_PER_MONTH: i64 = 30;
const WEEKS_PER_YEAR: i64 = 52;
const MONTHS_PER_YEAR: i64 = 12;

/// Normalise a recurring amount to what it contributes per month.
pub fn monthly_equivalent(amount: Decimal, frequency: &Frequency) -> Decimal {
    match frequency {
        Frequency::Daily => amount * Decimal::from(DAYS_PER_MONTH),
        Frequency::Weekly => {
            amount * Decimal::from(WEEKS_PER_YEAR) / Decimal::from(MONTHS_PER_YEAR)
        }
        Frequency::Monthly => amount,
        Frequency::Yearly => amount / Decimal::from(MONTHS_PER_YEAR),
        Frequency::Other(raw) => {
            warn!(frequency = %raw, "unknown recurrence frequency, using amount as-is");
            amount
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecurringTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl RecurringTotals {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Monthly-equivalent income and expense across all recurring entries.
pub fn recurring_monthly_totals(items: &[RecurringTransaction]) -> RecurringTotals {
    items
        .iter()
        .fold(RecurringTotals::default(), |mut acc, item| {
            let monthly = monthly_equivalent(item.amount, &item.frequency);
            match item.r#type {
                TransactionType::Income => acc.income += monthly,
                TransactionType::Expense => acc.expense += monthly,
            }
            acc
        })
}
