//! Analytics Bounded Context
//!
//! Risk/reward metrics for a strategy: net premium, max profit/loss with
//! explicit unbounded sides, breakeven prices, ROI, and the static
//! explanation templates attached to classified shapes.

pub mod services;
pub mod value_objects;

pub use services::{compute_metrics, zero_crossings};
pub use value_objects::{MetricsExplanation, PayoffBound, ProbabilityOfProfit, StrategyMetrics};
