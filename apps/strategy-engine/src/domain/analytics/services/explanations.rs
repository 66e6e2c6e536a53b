//! Classification-keyed explanation templates.
//!
//! Static text describing when a classified strategy reaches its maximum
//! profit and maximum loss, parameterized by the relevant strikes. Shapes
//! without a template get empty text rather than fabricated prose.

use rust_decimal::Decimal;

use crate::domain::strategy::value_objects::{Classification, Leg};

use super::super::value_objects::MetricsExplanation;

/// Build the max-profit/max-loss explanation for a classified leg set.
#[must_use]
pub fn explain(classification: &Classification, legs: &[Leg]) -> MetricsExplanation {
    let mut strikes: Vec<Decimal> = legs.iter().map(|leg| leg.strike).collect();
    strikes.sort_unstable();

    let (Some(low), Some(high)) = (strikes.first().copied(), strikes.last().copied()) else {
        return MetricsExplanation::default();
    };

    match classification.name.as_str() {
        "Long Call" => MetricsExplanation {
            max_profit: format!("Profit grows without limit as the price rises above {high}."),
            max_loss: format!(
                "The premium paid is lost if the price settles at or below {high}."
            ),
        },
        "Long Put" => MetricsExplanation {
            max_profit: format!("Profit peaks if the price falls to zero from {low}."),
            max_loss: format!(
                "The premium paid is lost if the price settles at or above {low}."
            ),
        },
        "Naked Call" => MetricsExplanation {
            max_profit: format!(
                "The premium is kept if the price settles at or below {high}."
            ),
            max_loss: format!("Loss grows without limit as the price rises above {high}."),
        },
        "Naked Put" => MetricsExplanation {
            max_profit: format!(
                "The premium is kept if the price settles at or above {low}."
            ),
            max_loss: format!("Loss peaks if the price falls to zero from {low}."),
        },
        "Bull Call Spread" | "Bull Put Spread" => MetricsExplanation {
            max_profit: format!("Reached when the price settles at or above {high}."),
            max_loss: format!("Reached when the price settles at or below {low}."),
        },
        "Bear Call Spread" | "Bear Put Spread" => MetricsExplanation {
            max_profit: format!("Reached when the price settles at or below {low}."),
            max_loss: format!("Reached when the price settles at or above {high}."),
        },
        "Straddle" => {
            if classification.is_credit {
                MetricsExplanation {
                    max_profit: format!(
                        "Both premiums are kept if the price settles exactly at {low}."
                    ),
                    max_loss: format!(
                        "Loss grows the further the price settles from {low} in either direction."
                    ),
                }
            } else {
                MetricsExplanation {
                    max_profit: format!(
                        "Profit grows the further the price settles from {low} in either direction."
                    ),
                    max_loss: format!(
                        "Both premiums are lost if the price settles exactly at {low}."
                    ),
                }
            }
        }
        "Strangle" => {
            if classification.is_credit {
                MetricsExplanation {
                    max_profit: format!(
                        "Both premiums are kept if the price settles between {low} and {high}."
                    ),
                    max_loss: format!(
                        "Loss grows as the price settles further outside {low} and {high}."
                    ),
                }
            } else {
                MetricsExplanation {
                    max_profit: format!(
                        "Profit grows as the price settles further outside {low} and {high}."
                    ),
                    max_loss: format!(
                        "Both premiums are lost if the price settles between {low} and {high}."
                    ),
                }
            }
        }
        "Iron Condor" => condor_explanation(&strikes, false),
        "Reverse Iron Condor" => condor_explanation(&strikes, true),
        _ => MetricsExplanation::default(),
    }
}

fn condor_explanation(strikes: &[Decimal], reverse: bool) -> MetricsExplanation {
    if strikes.len() != 4 {
        return MetricsExplanation::default();
    }
    let (outer_low, inner_low, inner_high, outer_high) =
        (strikes[0], strikes[1], strikes[2], strikes[3]);
    let inside = format!(
        "the price settles between {inner_low} and {inner_high}."
    );
    let outside = format!(
        "the price settles at or beyond {outer_low} or {outer_high}."
    );
    if reverse {
        MetricsExplanation {
            max_profit: format!("Reached when {outside}"),
            max_loss: format!("Reached when {inside}"),
        }
    } else {
        MetricsExplanation {
            max_profit: format!("Reached when {inside}"),
            max_loss: format!("Reached when {outside}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy::services::classify;
    use crate::domain::strategy::value_objects::OptionType;
    use rust_decimal_macros::dec;

    fn explained(legs: &[Leg]) -> MetricsExplanation {
        explain(&classify(legs), legs)
    }

    #[test]
    fn long_call_mentions_strike() {
        let legs = vec![Leg::buy(OptionType::Call, dec!(100), dec!(5))];
        let e = explained(&legs);
        assert!(e.max_profit.contains("100"));
        assert!(e.max_loss.contains("100"));
    }

    #[test]
    fn bull_call_spread_uses_both_strikes() {
        let legs = vec![
            Leg::buy(OptionType::Call, dec!(100), dec!(5)),
            Leg::sell(OptionType::Call, dec!(110), dec!(2)),
        ];
        let e = explained(&legs);
        assert!(e.max_profit.contains("110"));
        assert!(e.max_loss.contains("100"));
    }

    #[test]
    fn iron_condor_uses_inner_and_outer_strikes() {
        let legs = vec![
            Leg::sell(OptionType::Put, dec!(90), dec!(1)),
            Leg::buy(OptionType::Put, dec!(95), dec!(2)),
            Leg::buy(OptionType::Call, dec!(105), dec!(2)),
            Leg::sell(OptionType::Call, dec!(110), dec!(1)),
        ];
        let e = explained(&legs);
        assert!(e.max_profit.contains("95") && e.max_profit.contains("105"));
        assert!(e.max_loss.contains("90") && e.max_loss.contains("110"));
    }

    #[test]
    fn straddle_branches_on_credit() {
        let long = vec![
            Leg::buy(OptionType::Call, dec!(100), dec!(3)),
            Leg::buy(OptionType::Put, dec!(100), dec!(4)),
        ];
        assert!(explained(&long).max_loss.contains("lost"));

        let short = vec![
            Leg::sell(OptionType::Call, dec!(100), dec!(3)),
            Leg::sell(OptionType::Put, dec!(100), dec!(4)),
        ];
        assert!(explained(&short).max_profit.contains("kept"));
    }

    #[test]
    fn unknown_shapes_have_empty_text() {
        let legs = vec![
            Leg::buy(OptionType::Call, dec!(100), dec!(5)),
            Leg::buy(OptionType::Call, dec!(105), dec!(4)),
            Leg::buy(OptionType::Call, dec!(110), dec!(3)),
        ];
        let e = explained(&legs);
        assert!(e.max_profit.is_empty());
        assert!(e.max_loss.is_empty());
    }

    #[test]
    fn butterfly_has_no_template() {
        let legs = vec![
            Leg::buy(OptionType::Call, dec!(90), dec!(12)),
            Leg::sell(OptionType::Call, dec!(100), dec!(6)),
            Leg::sell(OptionType::Call, dec!(100), dec!(6)),
            Leg::buy(OptionType::Call, dec!(110), dec!(2)),
        ];
        assert_eq!(explained(&legs), MetricsExplanation::default());
    }
}
