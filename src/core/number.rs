//! Strict numeric scanners shared by the token parsers.
//!
//! `str::parse::<f64>` accepts signs, exponents and `inf`/`nan`, none of which
//! are meaningful in a distance or a pace. These helpers accept only what the
//! documented input formats allow.

/// Parse a non-negative decimal: ASCII digits with at most one `.`, and at
/// least one digit (`5`, `5.`, `.5`, `1.25`).
pub fn parse_real(text: &str) -> Option<f64> {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a non-empty run of ASCII digits. Leading zeros are fine and there is
/// no upper bound short of overflowing `f64`.
pub fn parse_whole(text: &str) -> Option<f64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `A:B` where both sides are reals, as `A + B / 60`.
pub fn parse_sexagesimal(text: &str) -> Option<f64> {
    let (whole, sixtieths) = text.split_once(':')?;
    Some(parse_real(whole)? + parse_real(sixtieths)? / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real_accepts_plain_decimals() {
        assert_eq!(parse_real("5"), Some(5.0));
        assert_eq!(parse_real(".5"), Some(0.5));
        assert_eq!(parse_real("5."), Some(5.0));
        assert_eq!(parse_real("99.99"), Some(99.99));
    }

    #[test]
    fn test_parse_real_rejects_everything_else() {
        for bad in ["", ".", "1.2.3", "-1", "+1", "1e3", "inf", "nan", " 1", "1_0"] {
            assert_eq!(parse_real(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_real_rejects_overflow() {
        assert_eq!(parse_real(&"9".repeat(400)), None);
        assert_eq!(parse_real(&format!("{}.5", "9".repeat(400))), None);
        assert_eq!(parse_real(&"9".repeat(30)), Some(1e30));
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole("000000062"), Some(62.0));
        assert_eq!(parse_whole(""), None);
        assert_eq!(parse_whole("1.5"), None);
        assert_eq!(parse_whole("+3"), None);
    }

    #[test]
    fn test_parse_whole_beyond_u64() {
        assert_eq!(parse_whole("99999999999999999999"), Some(1e20));
        assert_eq!(parse_whole(&format!("{}7", "0".repeat(500))), Some(7.0));
        assert_eq!(parse_whole(&"9".repeat(400)), None);
    }

    #[test]
    fn test_parse_sexagesimal() {
        assert_eq!(parse_sexagesimal("1:30"), Some(1.5));
        assert_eq!(parse_sexagesimal(":30"), None);
        assert_eq!(parse_sexagesimal("1:"), None);
        assert_eq!(parse_sexagesimal("1:2:3"), None);
        assert_eq!(parse_sexagesimal("130"), None);
    }
}
