//! Application Services

mod analyzer;

pub use analyzer::{ChartData, StrategyAnalyzer};
