//! Strategy Value Objects

mod classification;
mod leg;

pub use classification::{Classification, Direction, OptionComposition, StrategyCategory};
pub use leg::{Leg, LegAction, OptionType, net_premium, strategy_payoff};
