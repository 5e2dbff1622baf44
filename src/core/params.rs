use serde::{Deserialize, Serialize};

use crate::types::Preposition;

/// The raw input triple of one calculation, suitable for presets and scripting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Distance (for `in`), or distance/time (for `at`)
    pub first: String,
    pub preposition: Preposition,
    /// Time (for `in`), or pace (for `at`)
    pub second: String,
}

impl CalculationParams {
    pub fn new(
        first: impl Into<String>,
        preposition: Preposition,
        second: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            preposition,
            second: second.into(),
        }
    }
}
