//! Tolerant numeric parsing for loosely-typed form input.
//!
//! Form fields arrive as JSON numbers or strings and may be mid-edit, so
//! the policy is parse-or-default, never fail. The default table:
//!
//! | Field     | Default |
//! |-----------|---------|
//! | strike    | 0       |
//! | premium   | 0       |
//! | contracts | 1       |

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;
use std::str::FromStr;

/// Default contract count when the field is missing or unparsable.
pub const DEFAULT_CONTRACTS: u32 = 1;

/// Parse a JSON value as a Decimal, coercing to zero on failure.
///
/// Accepts numbers and numeric strings (trimmed). Anything else — null,
/// booleans, arrays, non-numeric text — coerces to zero.
#[must_use]
pub fn decimal_or_zero(value: &Value) -> Decimal {
    parse_decimal(value).unwrap_or(Decimal::ZERO)
}

/// Parse a JSON value as a Decimal, `None` when absent or unparsable.
///
/// Used for optional inputs (asset price, margin) where "not supplied"
/// and "zero" mean different things.
#[must_use]
pub fn optional_decimal(value: &Value) -> Option<Decimal> {
    parse_decimal(value)
}

/// Parse a JSON value as a contract count.
///
/// Fractional counts truncate toward zero; anything below 1 or unparsable
/// coerces to [`DEFAULT_CONTRACTS`].
#[must_use]
pub fn contracts_or_default(value: &Value) -> u32 {
    let truncated = parse_decimal(value).map(|d| d.trunc());
    match truncated {
        Some(n) if n >= Decimal::ONE => n.to_u32().unwrap_or(DEFAULT_CONTRACTS),
        _ => DEFAULT_CONTRACTS,
    }
}

fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}
