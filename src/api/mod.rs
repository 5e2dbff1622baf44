//! High-level library API: classify two raw tokens, run the matching parsers
//! and render the missing quantity. Prefer these entrypoints over the
//! low-level `core` parsers when embedding pacecalc.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::distance::parse_distance;
use crate::core::duration::format_duration;
use crate::core::pace::parse_pace;
use crate::core::params::CalculationParams;
use crate::core::time::parse_time;
use crate::core::units::distance_unit_for;
use crate::error::{Error, Result};
use crate::types::{Preposition, Quantity};

/// Outcome of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub quantity: Quantity,
    /// Raw result in the unit of `quantity` (min/km, km or minutes)
    pub value: f64,
    /// Human-readable result, e.g. `5:00min/km`, `9.5km` or `1:05:00`
    pub display: String,
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// Tell a time token from a distance token.
///
/// Only meaningful for the first token of an `at` calculation, where the
/// alternatives are time and distance. A pace token would be misread.
pub fn is_time(token: &str) -> bool {
    let token = token.trim();
    if !token.is_empty() && token.chars().all(char::is_alphabetic) {
        return false;
    }
    if distance_unit_for(token).is_some() {
        return false;
    }
    if token.contains(':') {
        return true;
    }
    token.ends_with(['h', 'm', 's'])
}

/// Pace needed to cover `distance` in `time`.
pub fn calculate_pace(distance: &str, time: &str) -> Result<Calculation> {
    let minutes = parse_time(time)?;
    let km = parse_distance(distance)?;
    let pace = minutes / km;
    if !pace.is_finite() {
        return Err(Error::distance(distance));
    }

    Ok(Calculation {
        quantity: Quantity::Pace,
        value: pace,
        display: format!("{}{}", format_duration(pace, false), Quantity::Pace.unit()),
    })
}

/// Time needed to cover `distance` at `pace`.
pub fn calculate_time(distance: &str, pace: &str) -> Result<Calculation> {
    let minutes = parse_distance(distance)? * parse_pace(pace)?;
    if !minutes.is_finite() {
        return Err(Error::distance(distance));
    }

    Ok(Calculation {
        quantity: Quantity::Time,
        value: minutes,
        display: format_duration(minutes, true),
    })
}

/// Distance covered in `time` at `pace`.
pub fn calculate_distance(time: &str, pace: &str) -> Result<Calculation> {
    let minutes = parse_time(time)?;
    let km = minutes / parse_pace(pace)?;
    if !km.is_finite() {
        return Err(Error::pace(pace));
    }

    Ok(Calculation {
        quantity: Quantity::Distance,
        value: km,
        display: format!("{}{}", format_kilometers(km), Quantity::Distance.unit()),
    })
}

/// Whole kilometers without decimals, anything else to at most two places
/// (ties to even). A value that rounds to a whole number also drops its
/// decimals: `9.997` renders as `10`.
fn format_kilometers(km: f64) -> String {
    if km.fract() == 0.0 {
        format!("{km:.0}")
    } else {
        let rounded = (km * 100.0).round_ties_even() / 100.0;
        format!("{rounded}")
    }
}

/// Compute the missing quantity from two raw tokens.
pub fn calculate(first: &str, preposition: Preposition, second: &str) -> Result<Calculation> {
    let first = first.trim().to_lowercase();
    let second = second.trim().to_lowercase();

    match preposition {
        Preposition::In => {
            debug!("{:?} in {:?}: distance and time, solving for pace", first, second);
            calculate_pace(&first, &second)
        }
        Preposition::At if is_time(&first) => {
            debug!("{:?} at {:?}: time and pace, solving for distance", first, second);
            calculate_distance(&first, &second)
        }
        Preposition::At => {
            debug!("{:?} at {:?}: distance and pace, solving for time", first, second);
            calculate_time(&first, &second)
        }
    }
}

/// Like [`calculate`], taking the inputs as one record.
pub fn calculate_with_params(params: &CalculationParams) -> Result<Calculation> {
    calculate(&params.first, params.preposition, &params.second)
}

/// Compute the missing quantity and return only its display string.
pub fn dispatch(first: &str, preposition: Preposition, second: &str) -> Result<String> {
    calculate(first, preposition, second).map(|calculation| calculation.display)
}
