//! Chart Value Objects

mod curve;

pub use curve::{CurveAnnotations, CurvePoint};
