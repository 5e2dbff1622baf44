//! Time tokens in colon notation (`H:M:S`, `M:S`) or letter notation
//! (`1h30m`, `1.5h`, `1:30m`, `90s`).
//!
//! The two grammars never mix: any `h`, `m` or `s` in the token selects the
//! letter grammar. Within the letter grammar, a single unit may carry a
//! fractional or colon-split value (except seconds), while two or more units
//! must be bare integers in `h`, `m`, `s` order.
use tracing::debug;

use crate::core::number::{parse_real, parse_sexagesimal, parse_whole};
use crate::core::units::{TIME_UNITS, time_unit_to_minutes};
use crate::error::{Error, Result};

/// Parse a lowercase, trimmed time token into total minutes.
pub fn parse_time(token: &str) -> Result<f64> {
    let has_letters = TIME_UNITS.iter().any(|letter| token.contains(*letter));
    let minutes = if has_letters {
        parse_with_letters(token)
    } else {
        parse_without_letters(token)
    }
    .ok_or_else(|| Error::time(token))?;

    debug!("Time {:?} -> {} min", token, minutes);
    Ok(minutes)
}

/// `[H:]M:S` with integer fields of any width.
fn parse_without_letters(token: &str) -> Option<f64> {
    let fields: Vec<&str> = token.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [minutes, seconds] => (0.0, parse_whole(minutes)?, parse_whole(seconds)?),
        [hours, minutes, seconds] => (
            parse_whole(hours)?,
            parse_whole(minutes)?,
            parse_whole(seconds)?,
        ),
        _ => return None,
    };
    Some(hours * 60.0 + minutes + seconds / 60.0)
}

fn parse_with_letters(token: &str) -> Option<f64> {
    let mut present = Vec::with_capacity(TIME_UNITS.len());
    for &letter in TIME_UNITS {
        match token.matches(letter).count() {
            0 => {}
            1 => present.push(letter),
            _ => {
                debug!("Time {:?} repeats unit {:?}", token, letter);
                return None;
            }
        }
    }

    match present.as_slice() {
        [single] => parse_single_unit(token, *single),
        _ => parse_compound(token),
    }
}

/// One unit letter, which must end the token. Hours and minutes accept a
/// decimal (`1.5h`) or colon-split (`1:30h`) value; seconds only an integer.
fn parse_single_unit(token: &str, letter: char) -> Option<f64> {
    let value = token.strip_suffix(letter)?;
    if letter == 's' {
        return parse_whole(value).map(|seconds| time_unit_to_minutes(seconds, letter));
    }

    if value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ':')
    {
        return None;
    }
    let amount = if value.contains(':') {
        parse_sexagesimal(value)?
    } else {
        parse_real(value)?
    };
    Some(time_unit_to_minutes(amount, letter))
}

/// `(digits h)?(digits m)?(digits s)?` covering the whole token.
fn parse_compound(token: &str) -> Option<f64> {
    let mut rest = token;
    let mut total = 0.0;
    for &letter in TIME_UNITS {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || !rest[digits..].starts_with(letter) {
            continue;
        }
        total += time_unit_to_minutes(parse_whole(&rest[..digits])?, letter);
        rest = &rest[digits + letter.len_utf8()..];
    }
    rest.is_empty().then_some(total)
}
