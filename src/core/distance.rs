//! Distance tokens: bare kilometers, unit-suffixed values and named races.
use tracing::debug;

use crate::core::number::parse_real;
use crate::core::units::{RACE_DISTANCES, distance_unit_for};
use crate::error::{Error, Result};

/// Parse a lowercase, trimmed distance token into kilometers.
///
/// Accepted forms are `[n]`, `[n]km`, `[n]k`, `[n]mi` and the named distances
/// `m`/`marathon` and `hm`/`half marathon`.
pub fn parse_distance(token: &str) -> Result<f64> {
    if let Some(&(_, km)) = RACE_DISTANCES.iter().find(|(name, _)| *name == token) {
        debug!("Distance {:?} is a named race: {} km", token, km);
        return Ok(km);
    }

    let km = match distance_unit_for(token) {
        Some(unit) => {
            let value = token.strip_suffix(unit.suffix).unwrap_or(token);
            parse_real(value).map(|n| n * unit.km)
        }
        None => parse_real(token),
    }
    .ok_or_else(|| Error::distance(token))?;

    debug!("Distance {:?} -> {} km", token, km);
    Ok(km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(parse_distance("0mi"), Ok(0.0));
        assert_eq!(parse_distance("1mi"), Ok(1.609344));
        assert_eq!(parse_distance("1km"), Ok(1.0));
        assert_eq!(parse_distance("123k"), Ok(123.0));
        assert_eq!(parse_distance("123"), Ok(123.0));
    }

    #[test]
    fn test_decimal_inputs() {
        assert_eq!(parse_distance("1.0mi"), Ok(1.609344));
        assert_eq!(parse_distance(".5mi"), Ok(0.804672));
        let miles = parse_distance("99.99mi").unwrap();
        assert!((miles - 160.91830656).abs() < 1e-9);
        assert_eq!(parse_distance("21.1k"), Ok(21.1));
    }

    #[test]
    fn test_overflowing_distance_is_rejected() {
        let huge = format!("{}k", "9".repeat(400));
        assert!(matches!(
            parse_distance(&huge),
            Err(Error::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_named_races() {
        assert_eq!(parse_distance("m"), Ok(42.195));
        assert_eq!(parse_distance("marathon"), Ok(42.195));
        assert_eq!(parse_distance("hm"), Ok(21.0975));
        assert_eq!(parse_distance("half marathon"), Ok(21.0975));
    }

    #[test]
    fn test_invalid_distances() {
        for bad in ["mi", "km", "k", "", "2hm", "ten", "1.2.3k", "-5k", "5 k"] {
            assert!(
                matches!(parse_distance(bad), Err(Error::InvalidDistance { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
