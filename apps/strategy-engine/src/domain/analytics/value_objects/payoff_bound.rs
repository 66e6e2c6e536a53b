//! Payoff extremum and probability-of-profit markers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A payoff extremum: a finite value or unbounded.
///
/// Consumers must branch on the variant; there is no numeric sentinel
/// standing in for "unlimited".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PayoffBound {
    /// Finite extremum.
    Bounded(Decimal),
    /// No finite ceiling or floor.
    Unbounded,
}

impl PayoffBound {
    /// Whether this side of the payoff has no finite bound.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The finite value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Bounded(v) => Some(*v),
            Self::Unbounded => None,
        }
    }

    /// Round a bounded value to cents; unbounded passes through.
    #[must_use]
    pub fn round(self) -> Self {
        match self {
            Self::Bounded(v) => Self::Bounded(v.round_dp(2)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl fmt::Display for PayoffBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(v) => write!(f, "{v:.2}"),
            Self::Unbounded => write!(f, "Unlimited"),
        }
    }
}

/// Probability-of-profit marker.
///
/// Always `NotComputed`: an accurate figure requires an implied-volatility
/// model, which this engine does not carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityOfProfit {
    /// Not estimated by this engine.
    #[default]
    NotComputed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn bounded_accessors() {
        let b = PayoffBound::Bounded(dec!(12.345));
        assert!(!b.is_unbounded());
        assert_eq!(b.value(), Some(dec!(12.345)));
        assert_eq!(b.round(), PayoffBound::Bounded(dec!(12.35)));
    }

    #[test]
    fn unbounded_accessors() {
        let u = PayoffBound::Unbounded;
        assert!(u.is_unbounded());
        assert_eq!(u.value(), None);
        assert_eq!(u.round(), PayoffBound::Unbounded);
    }

    #[test]
    fn display() {
        assert_eq!(PayoffBound::Bounded(dec!(7)).to_string(), "7.00");
        assert_eq!(PayoffBound::Unbounded.to_string(), "Unlimited");
    }

    #[test]
    fn payoff_bound_serde() {
        let json = serde_json::to_string(&PayoffBound::Unbounded).unwrap();
        let parsed: PayoffBound = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PayoffBound::Unbounded);
    }

    #[test]
    fn prob_profit_defaults_to_not_computed() {
        assert_eq!(ProbabilityOfProfit::default(), ProbabilityOfProfit::NotComputed);
    }
}
