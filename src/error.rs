// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by the pure calculation layer and the reducer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("no conversion rate from {from} to {to}")]
    ConversionUnavailable { from: String, to: String },
}

impl CalcError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CalcError::Validation(msg.into())
    }

    pub fn out_of_range() -> Self {
        CalcError::validation("amount out of range")
    }
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
