//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`strategy`]: Leg model, the payoff primitive, and the classifier
//! - [`analytics`]: Risk/reward metrics computed from sampled payoffs
//! - [`chart`]: Payoff curve sampling for rendering
//! - [`shared`]: Tolerant numeric parsing shared across contexts

pub mod analytics;
pub mod chart;
pub mod shared;
pub mod strategy;
