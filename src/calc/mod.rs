// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure budgeting arithmetic. Nothing in here touches storage or the clock;
//! callers pass plain data in and persist whatever comes back.

pub mod allocation;
pub mod analytics;
pub mod budgets;
pub mod fx;
pub mod recurrence;
pub mod savings;

use rust_decimal::Decimal;

/// Largest magnitude accepted for a single amount or rate. Keeps every
/// multiplication and sum the calculations perform well inside `Decimal`.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

pub fn within_range(d: Decimal) -> bool {
    d.abs() <= Decimal::from(MAX_AMOUNT)
}

