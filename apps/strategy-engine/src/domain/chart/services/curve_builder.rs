//! Payoff curve sampling for chart rendering.
//!
//! Independent of the metrics engine's own sampling: the chart layer
//! chooses the range and step. The base grid is refined next to each
//! strike so a piecewise-linear rendering reproduces the payoff kink
//! exactly at the strike instead of cutting the corner.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::analytics::services::zero_crossings;
use crate::domain::strategy::value_objects::{Leg, strategy_payoff};

use super::super::value_objects::{CurveAnnotations, CurvePoint};

/// Refinement offsets inserted around a strike that sits near the grid.
const STRIKE_OFFSETS: [Decimal; 5] = [dec!(-0.5), dec!(-0.1), dec!(0), dec!(0.1), dec!(0.5)];

/// Build an ordered `(price, payoff)` sequence over `[start, end]`.
///
/// Degenerate inputs degrade instead of failing: an inverted range is
/// swapped and a non-positive step falls back to 1. Every final point is
/// evaluated through the payoff primitive — never interpolated from
/// neighboring points.
#[must_use]
pub fn build_curve(legs: &[Leg], start: Decimal, end: Decimal, step: Decimal) -> Vec<CurvePoint> {
    let (start, end) = if end < start { (end, start) } else { (start, end) };
    let step = if step <= Decimal::ZERO { Decimal::ONE } else { step };

    let mut grid = Vec::new();
    let mut price = start;
    while price <= end {
        grid.push(price);
        price += step;
    }
    if grid.last() != Some(&end) {
        grid.push(end);
    }

    let mut prices = grid.clone();
    for leg in legs {
        let near_grid = grid
            .iter()
            .any(|grid_price| (*grid_price - leg.strike).abs() <= step);
        if !near_grid {
            continue;
        }
        for offset in STRIKE_OFFSETS {
            let refined = leg.strike + offset;
            if refined >= start && refined <= end {
                prices.push(refined);
            }
        }
    }

    prices.sort_unstable();
    prices.dedup();

    prices
        .into_iter()
        .map(|price| CurvePoint {
            price,
            payoff: strategy_payoff(legs, price),
        })
        .collect()
}

/// Extract max/min lines and breakeven crossings from a built curve.
///
/// Breakevens reuse the metrics engine's sign-change interpolation over
/// this denser point set, so they agree with the computed metrics up to
/// sampling density.
#[must_use]
pub fn extract_annotations(points: &[CurvePoint]) -> CurveAnnotations {
    let samples: Vec<(Decimal, Decimal)> = points
        .iter()
        .map(|point| (point.price, point.payoff))
        .collect();
    CurveAnnotations {
        max_payoff: points
            .iter()
            .map(|point| point.payoff)
            .max()
            .unwrap_or(Decimal::ZERO),
        min_payoff: points
            .iter()
            .map(|point| point.payoff)
            .min()
            .unwrap_or(Decimal::ZERO),
        breakevens: zero_crossings(&samples),
    }
}
