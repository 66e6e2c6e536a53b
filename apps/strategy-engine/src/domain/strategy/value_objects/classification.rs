//! Strategy classification value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Market direction implied by the net premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Net debit position.
    Long,
    /// Net credit position.
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Short => write!(f, "Short"),
        }
    }
}

/// Option-type composition across all legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionComposition {
    /// Every leg is a call.
    Calls,
    /// Every leg is a put.
    Puts,
    /// Calls and puts together.
    Mixed,
}

impl fmt::Display for OptionComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calls => write!(f, "Calls"),
            Self::Puts => write!(f, "Puts"),
            Self::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Category of a classified strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyCategory {
    /// One leg.
    SingleLeg,
    /// Two legs, same type, two strikes.
    VerticalSpread,
    /// Straddles and strangles.
    Combination,
    /// Four legs, one type, three strikes.
    Butterfly,
    /// Four legs, four strikes.
    Condor,
    /// Any unmatched shape.
    Custom,
    /// Empty strategy (no legs entered yet).
    NotApplicable,
}

impl fmt::Display for StrategyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleLeg => write!(f, "Single Leg"),
            Self::VerticalSpread => write!(f, "Vertical Spread"),
            Self::Combination => write!(f, "Combination"),
            Self::Butterfly => write!(f, "Butterfly"),
            Self::Condor => write!(f, "Condor"),
            Self::Custom => write!(f, "Custom"),
            Self::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Classification descriptor produced by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Display name, e.g. `"Bull Call Spread"`.
    pub name: String,
    /// Category the name belongs to.
    pub category: StrategyCategory,
    /// Long (debit) or Short (credit).
    pub direction: Direction,
    /// Whether the position opens for a net credit.
    pub is_credit: bool,
    /// Whether this is the reverse variant of a condor shape.
    pub is_reverse: bool,
    /// Call/put composition of the legs.
    pub composition: OptionComposition,
}

impl Classification {
    /// The fallthrough classification for unmatched shapes.
    #[must_use]
    pub fn custom(direction: Direction, is_credit: bool, composition: OptionComposition) -> Self {
        Self {
            name: "Custom Strategy".to_string(),
            category: StrategyCategory::Custom,
            direction,
            is_credit,
            is_reverse: false,
            composition,
        }
    }

    /// Placeholder classification for an empty strategy.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self {
            name: "N/A".to_string(),
            category: StrategyCategory::NotApplicable,
            direction: Direction::Long,
            is_credit: false,
            is_reverse: false,
            composition: OptionComposition::Mixed,
        }
    }
}
