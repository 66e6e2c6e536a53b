//! Analytics Domain Services

mod explanations;
mod metrics_engine;

pub use explanations::explain;
pub use metrics_engine::{SAMPLE_POINTS, compute_metrics, zero_crossings};
