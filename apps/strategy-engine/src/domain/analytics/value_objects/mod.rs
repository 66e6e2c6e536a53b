//! Analytics Value Objects

mod metrics;
mod payoff_bound;

pub use metrics::{MetricsExplanation, StrategyMetrics};
pub use payoff_bound::{PayoffBound, ProbabilityOfProfit};
