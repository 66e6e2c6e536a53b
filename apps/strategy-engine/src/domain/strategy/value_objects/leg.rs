//! Option leg value objects and the payoff primitive.
//!
//! `Leg::payoff_at` is the only payoff computation in the engine. The
//! metrics engine and the chart builder both evaluate curves through it,
//! so the two can never disagree on the underlying arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action taken on a leg (bought or sold/written).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegAction {
    /// Bought (debit).
    Buy,
    /// Sold/written (credit).
    Sell,
}

impl LegAction {
    /// Premium cash-flow sign (credit-positive convention).
    #[must_use]
    pub const fn premium_sign(&self) -> i32 {
        match self {
            Self::Buy => -1,
            Self::Sell => 1,
        }
    }

    /// Payoff sign (the long payoff is negated when sold).
    #[must_use]
    pub const fn payoff_sign(&self) -> i32 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl fmt::Display for LegAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}

/// A single option position within a strategy.
///
/// Legs always arrive pre-coerced: strike and premium are non-negative
/// and contracts is at least 1 (the DTO layer enforces the defaults).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Buy or sell.
    pub action: LegAction,
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Decimal,
    /// Premium per contract.
    pub premium: Decimal,
    /// Number of contracts.
    pub contracts: u32,
}

impl Leg {
    /// Create a new leg.
    #[must_use]
    pub const fn new(
        action: LegAction,
        option_type: OptionType,
        strike: Decimal,
        premium: Decimal,
        contracts: u32,
    ) -> Self {
        Self {
            action,
            option_type,
            strike,
            premium,
            contracts,
        }
    }

    /// Create a single-contract bought leg.
    #[must_use]
    pub const fn buy(option_type: OptionType, strike: Decimal, premium: Decimal) -> Self {
        Self::new(LegAction::Buy, option_type, strike, premium, 1)
    }

    /// Create a single-contract sold leg.
    #[must_use]
    pub const fn sell(option_type: OptionType, strike: Decimal, premium: Decimal) -> Self {
        Self::new(LegAction::Sell, option_type, strike, premium, 1)
    }

    /// Intrinsic value at settlement `price`.
    fn intrinsic_at(&self, price: Decimal) -> Decimal {
        match self.option_type {
            OptionType::Call => (price - self.strike).max(Decimal::ZERO),
            OptionType::Put => (self.strike - price).max(Decimal::ZERO),
        }
    }

    /// Profit or loss for this leg at settlement `price`.
    ///
    /// Long payoff is `intrinsic − premium`; sold legs negate it; the
    /// result scales by the contract count. Total over all real prices.
    #[must_use]
    pub fn payoff_at(&self, price: Decimal) -> Decimal {
        let raw = self.intrinsic_at(price) - self.premium;
        raw * Decimal::from(self.action.payoff_sign()) * Decimal::from(self.contracts)
    }

    /// Premium cash flow for this leg, credit-positive, scaled by contracts.
    #[must_use]
    pub fn signed_premium(&self) -> Decimal {
        self.premium * Decimal::from(self.action.premium_sign()) * Decimal::from(self.contracts)
    }
}

/// Total strategy payoff at settlement `price` (sum over all legs).
#[must_use]
pub fn strategy_payoff(legs: &[Leg], price: Decimal) -> Decimal {
    legs.iter().map(|leg| leg.payoff_at(price)).sum()
}

/// Net premium across all legs (credit-positive: sells add, buys subtract).
#[must_use]
pub fn net_premium(legs: &[Leg]) -> Decimal {
    legs.iter().map(Leg::signed_premium).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn long_call_payoff() {
        let leg = Leg::buy(OptionType::Call, dec!(100), dec!(5));
        assert_eq!(leg.payoff_at(dec!(90)), dec!(-5));
        assert_eq!(leg.payoff_at(dec!(100)), dec!(-5));
        assert_eq!(leg.payoff_at(dec!(110)), dec!(5));
        assert_eq!(leg.payoff_at(dec!(120)), dec!(15));
    }

    #[test]
    fn long_put_payoff() {
        let leg = Leg::buy(OptionType::Put, dec!(100), dec!(4));
        assert_eq!(leg.payoff_at(dec!(80)), dec!(16));
        assert_eq!(leg.payoff_at(dec!(100)), dec!(-4));
        assert_eq!(leg.payoff_at(dec!(110)), dec!(-4));
    }

    #[test]
    fn sold_leg_negates_payoff() {
        let long = Leg::buy(OptionType::Call, dec!(100), dec!(5));
        let short = Leg::sell(OptionType::Call, dec!(100), dec!(5));
        for price in [dec!(80), dec!(100), dec!(125)] {
            assert_eq!(short.payoff_at(price), -long.payoff_at(price));
        }
    }

    #[test]
    fn contracts_scale_payoff() {
        let leg = Leg::new(LegAction::Buy, OptionType::Call, dec!(100), dec!(5), 3);
        assert_eq!(leg.payoff_at(dec!(120)), dec!(45));
    }

    #[test]
    fn at_the_money_payoff_equals_premium_cash_flow() {
        let bought = Leg::new(LegAction::Buy, OptionType::Put, dec!(50), dec!(2.5), 2);
        assert_eq!(bought.payoff_at(bought.strike), bought.signed_premium());
        assert_eq!(bought.signed_premium(), dec!(-5));

        let sold = Leg::new(LegAction::Sell, OptionType::Call, dec!(50), dec!(2.5), 2);
        assert_eq!(sold.payoff_at(sold.strike), sold.signed_premium());
        assert_eq!(sold.signed_premium(), dec!(5));
    }

    #[test]
    fn strategy_payoff_sums_legs() {
        let legs = vec![
            Leg::buy(OptionType::Call, dec!(100), dec!(3)),
            Leg::buy(OptionType::Put, dec!(100), dec!(4)),
        ];
        // At the strike both legs expire worthless: lose both premiums.
        assert_eq!(strategy_payoff(&legs, dec!(100)), dec!(-7));
        // Far above the strike the call gains dollar-for-dollar.
        assert_eq!(strategy_payoff(&legs, dec!(150)), dec!(43));
    }

    #[test]
    fn net_premium_is_credit_positive() {
        let legs = vec![
            Leg::buy(OptionType::Call, dec!(100), dec!(5)),
            Leg::sell(OptionType::Call, dec!(110), dec!(2)),
        ];
        assert_eq!(net_premium(&legs), dec!(-3));
    }

    #[test]
    fn leg_serde_round_trip() {
        let leg = Leg::new(LegAction::Sell, OptionType::Put, dec!(95), dec!(1.35), 2);
        let json = serde_json::to_string(&leg).unwrap();
        let parsed: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, leg);
    }
}
