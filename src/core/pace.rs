//! Pace tokens, always in minutes per kilometer.
use tracing::debug;

use crate::core::number::{parse_real, parse_sexagesimal};
use crate::error::{Error, Result};

/// Parse a pace token (`M`, `M.F` or `M:S`) into decimal minutes per kilometer.
pub fn parse_pace(token: &str) -> Result<f64> {
    let pace = parse_real(token)
        .or_else(|| parse_sexagesimal(token))
        .ok_or_else(|| Error::pace(token))?;

    debug!("Pace {:?} -> {} min/km", token, pace);
    Ok(pace)
}
