// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Rust Core Library
//!
//! Deterministic options-strategy analytics engine. Turns a set of option
//! positions ("legs") into a strategy classification, risk/reward metrics,
//! and a sampled payoff curve for chart rendering.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `strategy`: Leg model, payoff primitive, strategy classifier
//!   - `analytics`: Strategy metrics (net premium, max profit/loss,
//!     breakevens, ROI) and explanation templates
//!   - `chart`: Payoff curve sampling with strike-adjacent refinement
//!   - `shared`: Tolerant numeric parsing policy
//!
//! - **Application**: The function-call contract for embedding layers
//!   - `dto`: Loosely-typed input records from the form layer
//!   - `services`: `StrategyAnalyzer` facade
//!
//! - **Observability**: Tracing initialization for the hosting process
//!
//! # Purity
//!
//! Every entry point is synchronous and pure: legs are passed by value,
//! no state is held between calls, and no input produces an error from
//! the core — malformed fields coerce to documented defaults and
//! unmatched shapes classify as "Custom".

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - DTOs and the analyzer facade.
pub mod application;

/// Observability - tracing initialization.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::analytics::services::compute_metrics;
pub use domain::analytics::value_objects::{
    MetricsExplanation, PayoffBound, ProbabilityOfProfit, StrategyMetrics,
};
pub use domain::chart::services::{build_curve, extract_annotations};
pub use domain::chart::value_objects::{CurveAnnotations, CurvePoint};
pub use domain::strategy::services::classify;
pub use domain::strategy::value_objects::{
    Classification, Direction, Leg, LegAction, OptionComposition, OptionType, StrategyCategory,
    net_premium, strategy_payoff,
};

// Application re-exports
pub use application::dto::{AnalysisRequestDto, DtoError, LegDto};
pub use application::services::{ChartData, StrategyAnalyzer};
