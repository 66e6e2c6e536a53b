//! Strategy metrics value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::strategy::value_objects::Classification;

use super::payoff_bound::{PayoffBound, ProbabilityOfProfit};

/// Explanation text for the max-profit and max-loss conditions.
///
/// Fields are empty when no template exists for the classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsExplanation {
    /// When the maximum profit is achieved.
    pub max_profit: String,
    /// When the maximum loss is achieved.
    pub max_loss: String,
}

/// Risk/reward metrics for a strategy.
///
/// The embedding system persists these fields verbatim into its trade
/// records; the engine only produces the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    /// Net premium, credit-positive, rounded to cents.
    pub net_premium: Decimal,
    /// Maximum profit across the sampled range, or unbounded.
    pub max_profit: PayoffBound,
    /// Maximum loss magnitude across the sampled range, or unbounded.
    pub max_loss: PayoffBound,
    /// Breakeven prices, ascending, deduplicated at cent precision.
    pub breakevens: Vec<Decimal>,
    /// Return on the user-supplied margin, as a percentage.
    pub roi: Decimal,
    /// Probability of profit (never estimated here).
    pub prob_profit: ProbabilityOfProfit,
    /// Classification of the leg set.
    pub classification: Classification,
    /// Max-profit/max-loss explanation templates.
    pub explanation: MetricsExplanation,
}

impl StrategyMetrics {
    /// Zero-valued metrics for an empty strategy.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            net_premium: Decimal::ZERO,
            max_profit: PayoffBound::Bounded(Decimal::ZERO),
            max_loss: PayoffBound::Bounded(Decimal::ZERO),
            breakevens: Vec::new(),
            roi: Decimal::ZERO,
            prob_profit: ProbabilityOfProfit::NotComputed,
            classification: Classification::not_applicable(),
            explanation: MetricsExplanation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metrics_are_zero_valued() {
        let m = StrategyMetrics::empty();
        assert_eq!(m.net_premium, Decimal::ZERO);
        assert_eq!(m.max_profit, PayoffBound::Bounded(Decimal::ZERO));
        assert_eq!(m.max_loss, PayoffBound::Bounded(Decimal::ZERO));
        assert!(m.breakevens.is_empty());
        assert_eq!(m.roi, Decimal::ZERO);
        assert_eq!(m.classification.name, "N/A");
        assert!(m.explanation.max_profit.is_empty());
    }

    #[test]
    fn metrics_serde_round_trip() {
        let m = StrategyMetrics::empty();
        let json = serde_json::to_string(&m).unwrap();
        let parsed: StrategyMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
