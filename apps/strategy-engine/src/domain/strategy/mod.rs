//! Strategy Bounded Context
//!
//! This module owns the leg model and strategy classification:
//! - Leg value objects and the single payoff primitive
//! - Deterministic pattern matching of 1/2/4-leg shapes into named
//!   strategies (verticals, straddles/strangles, condors, butterflies)

pub mod services;
pub mod value_objects;

pub use services::classify;
pub use value_objects::{
    Classification, Direction, Leg, LegAction, OptionComposition, OptionType, StrategyCategory,
    net_premium, strategy_payoff,
};
