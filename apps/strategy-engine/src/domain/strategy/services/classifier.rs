//! Deterministic strategy classifier.
//!
//! Pattern-matches 1, 2, and 4-leg shapes against the classification
//! table. Unmatched shapes, non-positive strikes, and other leg counts
//! fall through to "Custom Strategy"; classification never fails.
//!
//! Legs are classified on a strike-sorted copy; the caller's entry order
//! is never mutated.

use rust_decimal::Decimal;

use super::super::value_objects::{
    Classification, Direction, Leg, LegAction, OptionComposition, OptionType, StrategyCategory,
    net_premium,
};

/// Classify a set of legs into a named strategy.
#[must_use]
pub fn classify(legs: &[Leg]) -> Classification {
    let composition = composition_of(legs);
    let is_credit = net_premium(legs) > Decimal::ZERO;
    let direction = if is_credit {
        Direction::Short
    } else {
        Direction::Long
    };

    // Named shapes require positive strikes.
    if legs.is_empty() || legs.iter().any(|leg| leg.strike <= Decimal::ZERO) {
        return Classification::custom(direction, is_credit, composition);
    }

    let mut sorted: Vec<&Leg> = legs.iter().collect();
    sorted.sort_by(|a, b| a.strike.cmp(&b.strike));

    let named = match sorted.len() {
        1 => Some(classify_single(sorted[0])),
        2 => classify_pair(&sorted, composition),
        4 => classify_quad(&sorted, composition),
        _ => None,
    };

    named.map_or_else(
        || Classification::custom(direction, is_credit, composition),
        |(name, category, is_reverse)| Classification {
            name,
            category,
            direction,
            is_credit,
            is_reverse,
            composition,
        },
    )
}

fn composition_of(legs: &[Leg]) -> OptionComposition {
    if legs.is_empty() {
        return OptionComposition::Mixed;
    }
    if legs.iter().all(|leg| leg.option_type == OptionType::Call) {
        OptionComposition::Calls
    } else if legs.iter().all(|leg| leg.option_type == OptionType::Put) {
        OptionComposition::Puts
    } else {
        OptionComposition::Mixed
    }
}

fn classify_single(leg: &Leg) -> (String, StrategyCategory, bool) {
    let name = match leg.action {
        LegAction::Buy => format!("Long {}", leg.option_type),
        LegAction::Sell => format!("Naked {}", leg.option_type),
    };
    (name, StrategyCategory::SingleLeg, false)
}

fn classify_pair(
    sorted: &[&Leg],
    composition: OptionComposition,
) -> Option<(String, StrategyCategory, bool)> {
    let (lower, higher) = (sorted[0], sorted[1]);
    let distinct = distinct_strikes(sorted);

    match composition {
        OptionComposition::Mixed => {
            let name = if distinct == 1 { "Straddle" } else { "Strangle" };
            Some((name.to_string(), StrategyCategory::Combination, false))
        }
        OptionComposition::Calls | OptionComposition::Puts => {
            if distinct != 2 {
                return None;
            }
            let name = match (composition, lower.action, higher.action) {
                (OptionComposition::Calls, LegAction::Buy, LegAction::Sell) => "Bull Call Spread",
                (OptionComposition::Calls, LegAction::Sell, LegAction::Buy) => "Bear Call Spread",
                (OptionComposition::Puts, LegAction::Buy, LegAction::Sell) => "Bull Put Spread",
                (OptionComposition::Puts, LegAction::Sell, LegAction::Buy) => "Bear Put Spread",
                _ => return None,
            };
            Some((name.to_string(), StrategyCategory::VerticalSpread, false))
        }
    }
}

fn classify_quad(
    sorted: &[&Leg],
    composition: OptionComposition,
) -> Option<(String, StrategyCategory, bool)> {
    let distinct = distinct_strikes(sorted);

    match composition {
        OptionComposition::Mixed => {
            if distinct != 4 {
                return None;
            }
            let reverse = wings_bought_body_sold(sorted);
            let name = if reverse {
                "Reverse Iron Condor"
            } else {
                "Iron Condor"
            };
            Some((name.to_string(), StrategyCategory::Condor, reverse))
        }
        OptionComposition::Calls | OptionComposition::Puts => {
            let option_type = sorted[0].option_type;
            if distinct == 3 && middle_strike_leg_count(sorted) == 2 {
                let name = match (sorted[0].action, sorted[3].action) {
                    (LegAction::Buy, LegAction::Buy) => format!("Long {option_type} Butterfly"),
                    (LegAction::Sell, LegAction::Sell) => format!("Short {option_type} Butterfly"),
                    _ => format!("{option_type} Butterfly"),
                };
                return Some((name, StrategyCategory::Butterfly, false));
            }
            if distinct == 4 {
                let reverse = wings_bought_body_sold(sorted);
                let name = if reverse {
                    format!("Reverse {option_type} Condor")
                } else {
                    format!("{option_type} Condor")
                };
                return Some((name, StrategyCategory::Condor, reverse));
            }
            None
        }
    }
}

/// Outer legs both bought and inner legs both sold, on four strike-sorted
/// legs. This is the literal reverse-condor trigger; the intuitive
/// credit-condor shape is the `else` branch.
fn wings_bought_body_sold(sorted: &[&Leg]) -> bool {
    sorted[0].action == LegAction::Buy
        && sorted[3].action == LegAction::Buy
        && sorted[1].action == LegAction::Sell
        && sorted[2].action == LegAction::Sell
}

fn distinct_strikes(sorted: &[&Leg]) -> usize {
    let mut strikes: Vec<Decimal> = sorted.iter().map(|leg| leg.strike).collect();
    strikes.dedup();
    strikes.len()
}

/// Number of legs sitting on the middle of three distinct strikes.
fn middle_strike_leg_count(sorted: &[&Leg]) -> usize {
    let mut strikes: Vec<Decimal> = sorted.iter().map(|leg| leg.strike).collect();
    strikes.dedup();
    let middle = strikes[1];
    sorted.iter().filter(|leg| leg.strike == middle).count()
}
