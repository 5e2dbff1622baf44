//! Fixed unit tables and race distances.

/// A distance unit recognised by its suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceUnit {
    pub suffix: &'static str,
    pub km: f64,
}

pub const MILE_IN_KM: f64 = 1.609344;
pub const MARATHON_KM: f64 = 42.195;
pub const HALF_MARATHON_KM: f64 = 21.0975;

/// Suffixes are matched with `ends_with` strictly in this order; the first
/// hit wins. `km` must precede `k`.
pub const DISTANCE_UNITS: &[DistanceUnit] = &[
    DistanceUnit {
        suffix: "mi",
        km: MILE_IN_KM,
    },
    DistanceUnit {
        suffix: "km",
        km: 1.0,
    },
    DistanceUnit {
        suffix: "k",
        km: 1.0,
    },
];

/// Named race distances, matched against the whole token.
pub const RACE_DISTANCES: &[(&str, f64)] = &[
    ("m", MARATHON_KM),
    ("marathon", MARATHON_KM),
    ("hm", HALF_MARATHON_KM),
    ("half marathon", HALF_MARATHON_KM),
];

/// Time unit letters in the only order the multi-letter grammar accepts.
pub const TIME_UNITS: &[char] = &['h', 'm', 's'];

/// Convert an amount of the given time unit letter into minutes.
pub fn time_unit_to_minutes(amount: f64, letter: char) -> f64 {
    match letter {
        'h' => amount * 60.0,
        's' => amount / 60.0,
        _ => amount,
    }
}

/// Look up the first distance unit whose suffix ends `token`.
pub fn distance_unit_for(token: &str) -> Option<&'static DistanceUnit> {
    DISTANCE_UNITS
        .iter()
        .find(|unit| token.ends_with(unit.suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_km_wins_over_k() {
        assert_eq!(distance_unit_for("10km").map(|u| u.suffix), Some("km"));
        assert_eq!(distance_unit_for("10k").map(|u| u.suffix), Some("k"));
        assert_eq!(distance_unit_for("3mi").map(|u| u.suffix), Some("mi"));
        assert!(distance_unit_for("10").is_none());
    }

    #[test]
    fn test_time_unit_to_minutes() {
        assert_eq!(time_unit_to_minutes(1.5, 'h'), 90.0);
        assert_eq!(time_unit_to_minutes(7.0, 'm'), 7.0);
        assert_eq!(time_unit_to_minutes(90.0, 's'), 1.5);
    }
}
