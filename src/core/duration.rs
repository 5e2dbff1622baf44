//! Render decimal minutes as `[H:]M:SS`.

/// Format `minutes` as `M:SS`, or `H:MM:SS` when `show_hours` is set and the
/// duration reaches an hour.
///
/// Seconds are rounded from the fractional minute alone (ties to even), so
/// the whole-minute part is never disturbed by float noise in the product
/// `minutes * 60`. A rounded value of 60 seconds carries into the minutes
/// before hours are split off.
///
/// Minutes and hours stay `f64` so very long durations are not clamped to
/// the range of an integer type. `minutes` must be finite.
pub fn format_duration(minutes: f64, show_hours: bool) -> String {
    let minutes = minutes.max(0.0);
    let mut whole_minutes = minutes.trunc();
    let mut seconds = ((minutes - whole_minutes) * 60.0).round_ties_even() as u8;
    if seconds >= 60 {
        whole_minutes += 1.0;
        seconds -= 60;
    }

    if show_hours && whole_minutes >= 60.0 {
        let hours = (whole_minutes / 60.0).trunc();
        let remaining = whole_minutes % 60.0;
        format!("{hours:.0}:{remaining:02.0}:{seconds:02}")
    } else {
        format!("{whole_minutes:.0}:{seconds:02}")
    }
}
