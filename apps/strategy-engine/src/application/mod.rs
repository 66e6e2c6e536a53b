//! Application Layer
//!
//! The function-call contract exposed to the embedding form and chart
//! layers. It defines:
//!
//! - **DTOs**: Loosely-typed input records, tolerantly coerced to domain
//!   legs
//! - **Services**: The stateless `StrategyAnalyzer` facade

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
