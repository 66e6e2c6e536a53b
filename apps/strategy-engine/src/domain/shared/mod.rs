//! Shared Domain Types
//!
//! Utilities shared across bounded contexts.

pub mod numeric;

pub use numeric::{DEFAULT_CONTRACTS, contracts_or_default, decimal_or_zero, optional_decimal};
