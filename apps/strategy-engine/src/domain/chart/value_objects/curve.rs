//! Curve point and annotation value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single sample on the rendered payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Settlement price.
    pub price: Decimal,
    /// Strategy payoff at that price.
    pub payoff: Decimal,
}

/// Annotation lines extracted from the dense curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveAnnotations {
    /// Horizontal line at the highest sampled payoff.
    pub max_payoff: Decimal,
    /// Horizontal line at the lowest sampled payoff.
    pub min_payoff: Decimal,
    /// Breakeven crossings over the dense point set.
    pub breakevens: Vec<Decimal>,
}
