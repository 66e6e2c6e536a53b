//! Chart Domain Services

mod curve_builder;

pub use curve_builder::{build_curve, extract_annotations};
