// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::models::{Currency, Transaction};

pub static CURRENCIES: Lazy<Vec<Currency>> = Lazy::new(|| {
    vec![
        Currency::new("TRY", "₺", "Turkish Lira"),
        Currency::new("USD", "$", "US Dollar"),
        Currency::new("EUR", "€", "Euro"),
        Currency::new("GBP", "£", "British Pound"),
        Currency::new("JPY", "¥", "Japanese Yen"),
    ]
});

pub fn default_currency() -> Currency {
    CURRENCIES[0].clone()
}

pub fn find_currency(code: &str) -> Option<Currency> {
    let code = code.trim().to_uppercase();
    CURRENCIES.iter().find(|c| c.code == code).cloned()
}

// (from, to, mantissa, scale)
const BUILTIN_RATES: &[(&str, &str, i64, u32)] = &[
    ("USD", "EUR", 85, 2),
    ("USD", "TRY", 3050, 2),
    ("USD", "GBP", 73, 2),
    ("USD", "JPY", 110, 0),
    ("EUR", "USD", 118, 2),
    ("EUR", "TRY", 358, 1),
    ("EUR", "GBP", 86, 2),
    ("EUR", "JPY", 1295, 1),
    ("TRY", "USD", 33, 3),
    ("TRY", "EUR", 28, 3),
    ("TRY", "GBP", 24, 3),
    ("TRY", "JPY", 362, 2),
    ("GBP", "USD", 137, 2),
    ("GBP", "EUR", 116, 2),
    ("GBP", "TRY", 416, 1),
    ("GBP", "JPY", 150, 0),
    ("JPY", "USD", 91, 4),
    ("JPY", "EUR", 77, 4),
    ("JPY", "TRY", 28, 2),
    ("JPY", "GBP", 67, 4),
];

static BUILTIN: Lazy<RateTable> = Lazy::new(|| {
    let mut t = RateTable::default();
    for (from, to, m, s) in BUILTIN_RATES {
        t.set_rate(from, to, Decimal::new(*m, *s));
    }
    t
});

/// Directed exchange rates: `rates[from][to]` is how many `to` one `from` buys.
///
/// Entries are authored independently, so the table is neither symmetric nor
/// transitively closed and a missing pair is never derived from its reverse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub rates: BTreeMap<String, BTreeMap<String, Decimal>>,
}

impl RateTable {
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn rate(&self, from: &str, to: &str) -> Option<Decimal> {
        self.rates.get(from).and_then(|m| m.get(to)).copied()
    }

    pub fn set_rate(&mut self, from: &str, to: &str, rate: Decimal) {
        self.rates
            .entry(from.to_uppercase())
            .or_default()
            .insert(to.to_uppercase(), rate);
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, Decimal)> + '_ {
        self.rates.iter().flat_map(|(from, m)| {
            m.iter()
                .map(move |(to, r)| (from.as_str(), to.as_str(), *r))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rates.values().all(|m| m.is_empty())
    }

    /// Convert `amount` between currencies. Same-code conversion is the
    /// identity even when the table has no entry for it.
    pub fn convert(&self, amount: Decimal, from: &Currency, to: &Currency) -> CalcResult<Decimal> {
        if from.code == to.code {
            return Ok(amount);
        }
        let rate = self
            .rate(&from.code, &to.code)
            .ok_or_else(|| CalcError::ConversionUnavailable {
                from: from.code.clone(),
                to: to.code.clone(),
            })?;
        amount.checked_mul(rate).ok_or_else(CalcError::out_of_range)
    }

    /// Re-express every transaction in `target`, always starting from its
    /// original amount. One missing rate fails the whole batch.
    pub fn convert_transactions(
        &self,
        items: &[Transaction],
        target: &Currency,
    ) -> CalcResult<Vec<Transaction>> {
        items
            .iter()
            .map(|t| {
                let amount = self.convert(t.original_amount, &t.original_currency, target)?;
                Ok(Transaction {
                    amount,
                    currency: target.clone(),
                    ..t.clone()
                })
            })
            .collect()
    }
}
