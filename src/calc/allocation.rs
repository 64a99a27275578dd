// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};
use crate::models::IncomeAllocation;

pub fn total_percentage(allocations: &[IncomeAllocation]) -> Decimal {
    allocations.iter().map(|a| a.percentage).sum()
}

/// Spread `total_income` over the allocations by percentage.
///
/// Fails without computing anything when the percentages add up to more than
/// 100, when income is negative, or when a single share is outside 0-100.
/// The input slice is never modified; ids and categories carry over as-is.
pub fn allocate(
    total_income: Decimal,
    allocations: &[IncomeAllocation],
) -> CalcResult<Vec<IncomeAllocation>> {
    if total_income < Decimal::ZERO {
        return Err(CalcError::validation("total income cannot be negative"));
    }
    if let Some(bad) = allocations
        .iter()
        .find(|a| a.percentage < Decimal::ZERO || a.percentage > Decimal::ONE_HUNDRED)
    {
        return Err(CalcError::validation(format!(
            "allocation '{}' has percentage {} outside 0-100",
            bad.category, bad.percentage
        )));
    }
    if total_percentage(allocations) > Decimal::ONE_HUNDRED {
        return Err(CalcError::validation(
            "total allocation percentage cannot exceed 100%",
        ));
    }

    allocations
        .iter()
        .map(|a| {
            let share = total_income
                .checked_mul(a.percentage)
                .ok_or_else(CalcError::out_of_range)?;
            Ok(IncomeAllocation {
                amount: share / Decimal::ONE_HUNDRED,
                ..a.clone()
            })
        })
        .collect()
}

/// Share of `total_income` that `amount` represents, as a percentage.
/// Zero income yields 0 rather than a division error.
pub fn percentage_of_income(amount: Decimal, total_income: Decimal) -> Decimal {
    if total_income.is_zero() {
        return Decimal::ZERO;
    }
    amount / total_income * Decimal::ONE_HUNDRED
}
