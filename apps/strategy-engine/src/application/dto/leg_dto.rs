//! Leg input DTOs.
//!
//! Form fields arrive loosely typed: numbers or strings, possibly
//! mid-edit. Conversion to domain legs is total — malformed fields coerce
//! to the documented defaults instead of failing. Only a body that is not
//! valid JSON at all produces an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::shared::numeric::{contracts_or_default, decimal_or_zero, optional_decimal};
use crate::domain::strategy::value_objects::{Leg, LegAction, OptionType};

/// Error from parsing an analysis request document.
#[derive(Debug, Error)]
pub enum DtoError {
    /// The request body is not valid JSON.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// A single leg as entered in the strategy form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegDto {
    /// `"buy"` or `"sell"` (case-insensitive; unrecognized → buy).
    pub action: String,
    /// `"call"` or `"put"` (case-insensitive; unrecognized → call).
    #[serde(alias = "type")]
    pub option_type: String,
    /// Strike price — number or string.
    pub strike: Value,
    /// Premium per contract — number or string.
    pub premium: Value,
    /// Contract count — number or string.
    pub contracts: Value,
}

impl LegDto {
    /// Coerce to a domain leg. Total: never fails.
    #[must_use]
    pub fn to_leg(&self) -> Leg {
        Leg::new(
            parse_action(&self.action),
            parse_option_type(&self.option_type),
            decimal_or_zero(&self.strike),
            decimal_or_zero(&self.premium),
            contracts_or_default(&self.contracts),
        )
    }
}

fn parse_action(raw: &str) -> LegAction {
    if raw.trim().eq_ignore_ascii_case("sell") {
        LegAction::Sell
    } else {
        LegAction::Buy
    }
}

fn parse_option_type(raw: &str) -> OptionType {
    if raw.trim().eq_ignore_ascii_case("put") {
        OptionType::Put
    } else {
        OptionType::Call
    }
}

/// A full analysis request from the form layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequestDto {
    /// Strategy legs, in entry order.
    pub legs: Vec<LegDto>,
    /// Current underlying price — number or string, optional.
    pub asset_price: Value,
    /// User-supplied margin requirement — number or string, optional.
    pub margin_required: Value,
}

impl AnalysisRequestDto {
    /// Parse a request document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DtoError::InvalidBody`] when the document itself is not
    /// valid JSON. Malformed individual fields coerce to defaults instead.
    pub fn from_json(body: &str) -> Result<Self, DtoError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Coerce every leg to its domain form, preserving entry order.
    #[must_use]
    pub fn to_legs(&self) -> Vec<Leg> {
        self.legs.iter().map(LegDto::to_leg).collect()
    }

    /// The asset price, when supplied and parsable.
    #[must_use]
    pub fn asset_price(&self) -> Option<Decimal> {
        optional_decimal(&self.asset_price)
    }

    /// The margin requirement, when supplied and parsable.
    #[must_use]
    pub fn margin_required(&self) -> Option<Decimal> {
        optional_decimal(&self.margin_required)
    }
}
