//! Chart Bounded Context
//!
//! Payoff curve sampling for rendering: a caller-defined base grid,
//! refined next to each strike so the piecewise-linear drawing reproduces
//! the payoff kinks exactly, plus annotation extraction (max/min lines
//! and breakeven crossings).

pub mod services;
pub mod value_objects;

pub use services::{build_curve, extract_annotations};
pub use value_objects::{CurveAnnotations, CurvePoint};
