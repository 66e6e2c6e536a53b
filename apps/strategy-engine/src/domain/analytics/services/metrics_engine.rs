//! Strategy metrics computation.
//!
//! Samples the payoff curve across a strike-derived price range and
//! reduces it to max profit, max loss, and breakevens. The payoff of an
//! option strategy is piecewise linear with kinks only at strikes, so the
//! strikes themselves are added to the sample grid; extrema and
//! breakevens then come out exact rather than grid-limited.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::domain::strategy::services::classify;
use crate::domain::strategy::value_objects::{
    Leg, LegAction, OptionType, net_premium, strategy_payoff,
};

use super::super::value_objects::{PayoffBound, ProbabilityOfProfit, StrategyMetrics};
use super::explanations::explain;

/// Number of evenly spaced samples across the price range.
///
/// Tunable fidelity: strikes are sampled in addition, so the reduced
/// metrics stay stable across sample counts.
pub const SAMPLE_POINTS: usize = 500;

const RANGE_LOWER_FACTOR: Decimal = dec!(0.5);
const RANGE_UPPER_FACTOR: Decimal = dec!(1.5);
const FALLBACK_RANGE: (Decimal, Decimal) = (dec!(10), dec!(100));

/// Compute risk/reward metrics for a set of legs.
///
/// Total over every input: an empty leg list yields zero-valued metrics
/// with the "N/A" classification, and unmatched shapes classify as
/// "Custom". `asset_price` is contextual (surfaced to chart consumers and
/// logs); `margin_required` drives ROI when present and non-zero.
#[must_use]
pub fn compute_metrics(
    legs: &[Leg],
    asset_price: Option<Decimal>,
    margin_required: Option<Decimal>,
) -> StrategyMetrics {
    if legs.is_empty() {
        return StrategyMetrics::empty();
    }

    let net = net_premium(legs);
    let (lo, hi) = sampling_range(legs);
    let samples = sample_payoffs(legs, lo, hi);

    let max_payoff = samples
        .iter()
        .map(|(_, payoff)| *payoff)
        .max()
        .unwrap_or(Decimal::ZERO);
    let min_payoff = samples
        .iter()
        .map(|(_, payoff)| *payoff)
        .min()
        .unwrap_or(Decimal::ZERO);

    // Max loss is reported as a magnitude.
    let mut max_profit = PayoffBound::Bounded(max_payoff);
    let mut max_loss = PayoffBound::Bounded(min_payoff.abs());
    apply_exact_overrides(legs, &mut max_profit, &mut max_loss);

    let breakevens = zero_crossings(&samples);

    let roi = margin_required
        .filter(|margin| !margin.is_zero())
        .map_or(Decimal::ZERO, |margin| {
            (net / margin * Decimal::ONE_HUNDRED).round_dp(2)
        });

    let classification = classify(legs);
    let explanation = explain(&classification, legs);

    debug!(
        legs = legs.len(),
        name = %classification.name,
        asset_price = ?asset_price,
        net_premium = %net,
        "computed strategy metrics"
    );

    StrategyMetrics {
        net_premium: net.round_dp(2),
        max_profit: max_profit.round(),
        max_loss: max_loss.round(),
        breakevens,
        roi,
        prob_profit: ProbabilityOfProfit::NotComputed,
        classification,
        explanation,
    }
}

/// Zero-crossing prices over consecutive `(price, payoff)` samples.
///
/// A pair brackets a crossing when the payoffs change sign or either end
/// sits exactly at zero. Crossings are linearly interpolated, rounded to
/// cents, negatives dropped, deduplicated, and returned ascending.
#[must_use]
pub fn zero_crossings(samples: &[(Decimal, Decimal)]) -> Vec<Decimal> {
    let mut crossings = Vec::new();
    for pair in samples.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        let brackets_zero = (y1 <= Decimal::ZERO && y2 >= Decimal::ZERO)
            || (y1 >= Decimal::ZERO && y2 <= Decimal::ZERO);
        if !brackets_zero {
            continue;
        }
        let price = if y1 == y2 {
            x1 // flat segment lying on zero
        } else {
            x1 + (x2 - x1) * -y1 / (y2 - y1)
        };
        crossings.push(price.round_dp(2));
    }
    crossings.retain(|price| *price >= Decimal::ZERO);
    crossings.sort_unstable();
    crossings.dedup();
    crossings
}

/// Price range derived from positive strikes, or the fixed fallback.
fn sampling_range(legs: &[Leg]) -> (Decimal, Decimal) {
    let strikes: Vec<Decimal> = legs
        .iter()
        .map(|leg| leg.strike)
        .filter(|strike| *strike > Decimal::ZERO)
        .collect();
    let (Some(min), Some(max)) = (
        strikes.iter().min().copied(),
        strikes.iter().max().copied(),
    ) else {
        return FALLBACK_RANGE;
    };
    (
        Decimal::ZERO.max(min * RANGE_LOWER_FACTOR),
        max * RANGE_UPPER_FACTOR,
    )
}

/// Evenly spaced samples plus the strikes themselves, ascending.
fn sample_payoffs(legs: &[Leg], lo: Decimal, hi: Decimal) -> Vec<(Decimal, Decimal)> {
    let step = (hi - lo) / Decimal::from(SAMPLE_POINTS as u32 - 1);
    let mut prices: Vec<Decimal> = (0..SAMPLE_POINTS)
        .map(|i| lo + step * Decimal::from(i as u32))
        .collect();
    for leg in legs {
        if leg.strike > lo && leg.strike < hi {
            prices.push(leg.strike);
        }
    }
    prices.sort_unstable();
    prices.dedup();

    prices
        .into_iter()
        .map(|price| (price, strategy_payoff(legs, price)))
        .collect()
}

/// Sides a finite sample grid cannot capture.
///
/// Above the highest strike only calls move, so the terminal slope is the
/// sum of signed call contracts: positive means profit grows without
/// bound, negative means loss does. A lone put peaks at a settlement
/// price of zero, below the sampling floor, so its extremum is closed
/// form.
fn apply_exact_overrides(legs: &[Leg], max_profit: &mut PayoffBound, max_loss: &mut PayoffBound) {
    let call_slope: i64 = legs
        .iter()
        .filter(|leg| leg.option_type == OptionType::Call)
        .map(|leg| i64::from(leg.action.payoff_sign()) * i64::from(leg.contracts))
        .sum();
    if call_slope > 0 {
        *max_profit = PayoffBound::Unbounded;
    }
    if call_slope < 0 {
        *max_loss = PayoffBound::Unbounded;
    }

    if let [leg] = legs {
        if leg.option_type == OptionType::Put {
            let exact =
                Decimal::ZERO.max(leg.strike - leg.premium) * Decimal::from(leg.contracts);
            match leg.action {
                LegAction::Buy => *max_profit = PayoffBound::Bounded(exact),
                LegAction::Sell => *max_loss = PayoffBound::Bounded(exact),
            }
        }
    }
}
