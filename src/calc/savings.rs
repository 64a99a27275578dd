// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};

/// Percent of the target already saved. Not clamped: 150 means the goal was
/// overshot by half. A target of zero or less is rejected.
pub fn progress(current_amount: Decimal, target_amount: Decimal) -> CalcResult<Decimal> {
    if target_amount <= Decimal::ZERO {
        return Err(CalcError::validation(
            "savings target must be greater than zero",
        ));
    }
    Ok(current_amount / target_amount * Decimal::ONE_HUNDRED)
}

/// Calendar-month distance from `from` to `to`. Days are ignored, so the 30th
/// of one month and the 1st of the next are one month apart.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + (to.month() as i64 - from.month() as i64)
}

/// Amount to put aside each month to hit `target_amount` by `target_date`.
///
/// Returns zero once the target month is the current month or already past.
/// A negative result means the goal is already met.
pub fn monthly_contribution_needed(
    target_amount: Decimal,
    current_amount: Decimal,
    target_date: NaiveDate,
    today: NaiveDate,
) -> Decimal {
    let months_remaining = months_between(today, target_date);
    if months_remaining <= 0 {
        return Decimal::ZERO;
    }
    (target_amount - current_amount) / Decimal::from(months_remaining)
}

/// Clamp a percentage into 0-100 for progress bars.
pub fn clamp_percent(p: Decimal) -> Decimal {
    p.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}
