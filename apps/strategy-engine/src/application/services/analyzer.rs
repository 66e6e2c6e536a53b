//! Strategy analyzer facade.
//!
//! The single entry point the form and chart layers call: legs in,
//! metrics and chart data out. Stateless and synchronous; every call is
//! independent, so concurrent callers need no coordination.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::dto::AnalysisRequestDto;
use crate::domain::analytics::services::compute_metrics;
use crate::domain::analytics::value_objects::StrategyMetrics;
use crate::domain::chart::services::{build_curve, extract_annotations};
use crate::domain::chart::value_objects::{CurveAnnotations, CurvePoint};
use crate::domain::strategy::value_objects::Leg;

/// Chart-ready output: the dense curve plus annotation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Ordered `(price, payoff)` samples.
    pub points: Vec<CurvePoint>,
    /// Max/min lines and breakeven crossings.
    pub annotations: CurveAnnotations,
    /// Current underlying price, when the caller supplied one.
    pub current_price: Option<Decimal>,
}

/// Stateless analytics facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyAnalyzer;

impl StrategyAnalyzer {
    /// Create the analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compute metrics for a form request.
    #[must_use]
    pub fn analyze(&self, request: &AnalysisRequestDto) -> StrategyMetrics {
        let legs = request.to_legs();
        debug!(legs = legs.len(), "analyzing strategy request");
        compute_metrics(&legs, request.asset_price(), request.margin_required())
    }

    /// Compute metrics for already-typed legs.
    #[must_use]
    pub fn analyze_legs(
        &self,
        legs: &[Leg],
        asset_price: Option<Decimal>,
        margin_required: Option<Decimal>,
    ) -> StrategyMetrics {
        compute_metrics(legs, asset_price, margin_required)
    }

    /// Build chart data over an explicit price range.
    #[must_use]
    pub fn chart(
        &self,
        legs: &[Leg],
        start: Decimal,
        end: Decimal,
        step: Decimal,
        current_price: Option<Decimal>,
    ) -> ChartData {
        let points = build_curve(legs, start, end, step);
        let annotations = extract_annotations(&points);
        debug!(
            points = points.len(),
            breakevens = annotations.breakevens.len(),
            "built chart data"
        );
        ChartData {
            points,
            annotations,
            current_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::value_objects::PayoffBound;
    use crate::domain::strategy::value_objects::OptionType;
    use rust_decimal_macros::dec;

    #[test]
    fn analyze_from_request() {
        let request = AnalysisRequestDto::from_json(
            r#"{"legs": [
                {"action": "buy", "type": "call", "strike": 100, "premium": 5},
                {"action": "sell", "type": "call", "strike": "110", "premium": "2"}
            ],
            "margin_required": 300}"#,
        )
        .unwrap();
        let metrics = StrategyAnalyzer::new().analyze(&request);
        assert_eq!(metrics.classification.name, "Bull Call Spread");
        assert_eq!(metrics.net_premium, dec!(-3));
        assert_eq!(metrics.roi, dec!(-1.00));
    }

    #[test]
    fn chart_carries_current_price() {
        let legs = vec![Leg::buy(OptionType::Call, dec!(100), dec!(5))];
        let chart =
            StrategyAnalyzer::new().chart(&legs, dec!(80), dec!(120), dec!(1), Some(dec!(101)));
        assert_eq!(chart.current_price, Some(dec!(101)));
        assert!(!chart.points.is_empty());
    }

    #[test]
    fn facade_matches_direct_classifier() {
        let legs = vec![
            Leg::buy(OptionType::Call, dec!(100), dec!(3)),
            Leg::buy(OptionType::Put, dec!(100), dec!(4)),
        ];
        let metrics = StrategyAnalyzer::new().analyze_legs(&legs, None, None);
        assert_eq!(
            metrics.classification,
            crate::domain::strategy::services::classify(&legs)
        );
        assert_eq!(metrics.max_profit, PayoffBound::Unbounded);
    }
}
