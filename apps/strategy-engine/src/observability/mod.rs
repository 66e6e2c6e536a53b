//! Observability module for logging.
//!
//! The engine itself only emits `tracing` events; the hosting process
//! decides where they go. This module wires a console subscriber with
//! env-filter support for standalone use and tests.

mod tracing;

pub use self::tracing::{TracingConfig, TracingError, init_tracing};
