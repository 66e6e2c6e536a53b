//! End-to-end tests driving the analyzer facade: loose form input in,
//! metrics and chart data out.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strategy_engine::{
    AnalysisRequestDto, Leg, OptionType, PayoffBound, StrategyAnalyzer, classify,
};

fn analyzer() -> StrategyAnalyzer {
    StrategyAnalyzer::new()
}

#[test]
fn bull_call_spread_closed_form_agrees_with_sampling() {
    // Buy 100 @ 5, sell 110 @ 2, 3 contracts each: debit d = 9,
    // width (H - L) * c = 30.
    let request = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "buy", "type": "call", "strike": 100, "premium": 5, "contracts": 3},
            {"action": "sell", "type": "call", "strike": 110, "premium": 2, "contracts": 3}
        ]}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&request);

    let tolerance = dec!(0.01);
    let max_loss = metrics.max_loss.value().unwrap();
    let max_profit = metrics.max_profit.value().unwrap();
    assert!((max_loss - dec!(9)).abs() <= tolerance);
    assert!((max_profit - dec!(21)).abs() <= tolerance);
    assert_eq!(metrics.classification.name, "Bull Call Spread");
    assert_eq!(metrics.net_premium, dec!(-9));
}

#[test]
fn straddle_breakevens_and_bounds() {
    // Buy call + buy put at K = 100, premiums 3 and 4.
    let request = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "buy", "type": "call", "strike": 100, "premium": 3},
            {"action": "buy", "type": "put", "strike": 100, "premium": 4}
        ]}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&request);

    assert_eq!(metrics.breakevens, vec![dec!(93), dec!(107)]);
    assert_eq!(metrics.max_loss, PayoffBound::Bounded(dec!(7)));
    assert_eq!(metrics.max_profit, PayoffBound::Unbounded);
    assert_eq!(metrics.classification.name, "Straddle");
}

#[test]
fn iron_condor_literal_classification() {
    // Strike-sorted [90 buy put, 95 sell put, 105 sell call, 110 buy call]:
    // outer bought, inner sold — the reverse variant by the table.
    let request = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "buy", "type": "put", "strike": 90, "premium": 1},
            {"action": "sell", "type": "put", "strike": 95, "premium": 2},
            {"action": "sell", "type": "call", "strike": 105, "premium": 2},
            {"action": "buy", "type": "call", "strike": 110, "premium": 1}
        ]}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&request);

    assert_eq!(metrics.classification.name, "Reverse Iron Condor");
    assert!(metrics.classification.is_reverse);
    assert_eq!(metrics.classification.category.to_string(), "Condor");
}

#[test]
fn metrics_classification_matches_direct_classifier() {
    let request = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "sell", "type": "put", "strike": 95, "premium": 2},
            {"action": "buy", "type": "put", "strike": 85, "premium": 1}
        ]}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&request);
    assert_eq!(metrics.classification, classify(&request.to_legs()));
    assert_eq!(metrics.classification.name, "Bull Put Spread");
}

#[test]
fn malformed_fields_degrade_to_custom_zero_strike() {
    let request = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "buy", "type": "call", "strike": "tbd", "premium": "5"}
        ]}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&request);
    assert_eq!(metrics.classification.name, "Custom Strategy");
    assert_eq!(metrics.net_premium, dec!(-5));
}

#[test]
fn empty_strategy_is_not_applicable() {
    let request = AnalysisRequestDto::from_json(r#"{"legs": []}"#).unwrap();
    let metrics = analyzer().analyze(&request);
    assert_eq!(metrics.classification.name, "N/A");
    assert_eq!(metrics.net_premium, Decimal::ZERO);
    assert!(metrics.breakevens.is_empty());
}

#[test]
fn roi_uses_supplied_margin() {
    let request = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "sell", "type": "put", "strike": 100, "premium": 5}
        ],
        "margin_required": "500"}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&request);
    assert_eq!(metrics.roi, dec!(1.00));
}

#[test]
fn chart_includes_refinement_points_for_single_call() {
    let legs = vec![Leg::buy(OptionType::Call, dec!(100), dec!(5))];
    let chart = analyzer().chart(&legs, dec!(80), dec!(120), dec!(2), None);

    let prices: Vec<Decimal> = chart.points.iter().map(|p| p.price).collect();
    for expected in [dec!(99.5), dec!(99.9), dec!(100), dec!(100.1), dec!(100.5)] {
        assert!(prices.contains(&expected), "missing {expected}");
    }
}

#[test]
fn chart_breakevens_agree_with_metrics() {
    let legs = vec![
        Leg::buy(OptionType::Call, dec!(100), dec!(5)),
        Leg::sell(OptionType::Call, dec!(110), dec!(2)),
    ];
    let metrics = analyzer().analyze_legs(&legs, None, None);
    let chart = analyzer().chart(&legs, dec!(80), dec!(130), dec!(1), None);

    assert_eq!(metrics.breakevens.len(), chart.annotations.breakevens.len());
    for (metric_be, chart_be) in metrics
        .breakevens
        .iter()
        .zip(chart.annotations.breakevens.iter())
    {
        assert!((*metric_be - *chart_be).abs() <= dec!(0.01));
    }
}

#[test]
fn explanations_cover_named_shapes_only() {
    let vertical = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "buy", "type": "call", "strike": 100, "premium": 5},
            {"action": "sell", "type": "call", "strike": 110, "premium": 2}
        ]}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&vertical);
    assert!(metrics.explanation.max_profit.contains("110"));
    assert!(metrics.explanation.max_loss.contains("100"));

    let custom = AnalysisRequestDto::from_json(
        r#"{"legs": [
            {"action": "buy", "type": "call", "strike": 100, "premium": 5},
            {"action": "buy", "type": "call", "strike": 105, "premium": 4},
            {"action": "buy", "type": "call", "strike": 110, "premium": 3}
        ]}"#,
    )
    .unwrap();
    let metrics = analyzer().analyze(&custom);
    assert!(metrics.explanation.max_profit.is_empty());
    assert!(metrics.explanation.max_loss.is_empty());
}
