//! Checks client input before any computation is performed.

use crate::constants::MAX_BUDGET;
use crate::types::Money;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {field} field is required.")]
    Missing { field: &'static str },
    #[error("The {field} field must be a number, got {value:?}.")]
    NotNumeric { field: &'static str, value: String },
    #[error("The {field} field must be at least 0.")]
    Negative { field: &'static str },
    #[error("The {field} field must not be greater than {max}.")]
    TooLarge { field: &'static str, max: Money },
}

impl ValidationError {
    /// Name of the input field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::TooLarge { field, .. } => field,
        }
    }
}

/// Parses a non-negative monetary value supplied for `field`.
///
/// Accepts plain or scientific decimal notation surrounded by whitespace, rounding to two
/// decimals. A value that only becomes zero after rounding (`-0.001`) is accepted as zero.
pub fn parse_money(field: &'static str, input: Option<&str>) -> Result<Money, ValidationError> {
    let raw: &str = input.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let value: Money = raw.parse().map_err(|_| ValidationError::NotNumeric {
        field,
        value: raw.to_string(),
    })?;

    if value < Money::ZERO {
        return Err(ValidationError::Negative { field });
    }
    if value > MAX_BUDGET {
        return Err(ValidationError::TooLarge {
            field,
            max: MAX_BUDGET,
        });
    }
    Ok(value)
}

/// Parses the total budget a client is willing to spend.
pub fn parse_budget(input: Option<&str>) -> Result<Money, ValidationError> {
    parse_money("budget", input)
}

/// Parses a bid amount.
pub fn parse_amount(input: Option<&str>) -> Result<Money, ValidationError> {
    parse_money("amount", input)
}
