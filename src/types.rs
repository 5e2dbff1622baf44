//! Shared types used across pacecalc.
//! Includes `Preposition` (which pair of inputs was given) and `Quantity`
//! (which measurement a calculation produced).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preposition {
    /// Distance *at* pace gives time, time *at* pace gives distance
    At,
    /// Distance *in* time gives pace
    In,
}

impl std::fmt::Display for Preposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preposition::At => write!(f, "at"),
            Preposition::In => write!(f, "in"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Minutes per kilometer
    Pace,
    /// Kilometers
    Distance,
    /// Minutes
    Time,
}

impl Quantity {
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Pace => "min/km",
            Quantity::Distance => "km",
            Quantity::Time => "min",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Pace => write!(f, "Pace"),
            Quantity::Distance => write!(f, "Distance"),
            Quantity::Time => write!(f, "Time"),
        }
    }
}
