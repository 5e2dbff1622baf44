use clap::Parser;

use pacecalc::Preposition;

const ABOUT: &str = "Pace calculator: give two of pace, time and distance and get the third.";

const LONG_ABOUT: &str = "\
Pace calculator: give two of pace, time and distance and get the third.

Some examples:
  pacecalc 45:00 at 4:40         9.64km
  pacecalc marathon in 2:01:09   2:52min/km
  pacecalc 15km at 3:23          50:45";

const FORMATS: &str = "\
Distance inputs
  A number [n], integer or decimal, as [n], [n]km or [n]k for kilometers,
  or [n]mi for miles. Two preset distances take no number:
  m or marathon, and hm or \"half marathon\" (quoted).

Time inputs, without letters
  H:M:S, hours optional, so 02:03 is 2 minutes and 3 seconds. Fields may be
  zero padded and minutes and seconds may exceed 60: 000000062:03 is valid.

Time inputs, with letters
  [n]h[n]m[n]s with integer values, each part optional, in that order:
  01h02m03s, 1h2m, 1h3s, 90s.
  A lone hours or minutes value may be a decimal (2.5m, .5h) or use a colon
  (01:02h). Seconds are always integers.
  Invalid: 0.5s, :30h, 30m1h, 1h30, 1:30h20s.

Pace inputs
  Minutes per kilometer as M, M:S (4:30) or M.F (4.5). No hours, no letters.

Output
  distance in kilometers with decimals only where needed: 12km, 12.1km
  time as M:SS, with hours from one hour up: 5:00, 1:05:00
  pace in minutes per kilometer: 5:00min/km, 65:00min/km
  Outputs are always in kilometers, even for distances given in miles.";

#[derive(Parser)]
#[command(
    name = "pacecalc",
    version,
    about = ABOUT,
    long_about = LONG_ABOUT,
    after_long_help = FORMATS
)]
pub struct CliArgs {
    /// Distance (with `in`), or distance or time (with `at`)
    #[arg(value_name = "FIRST_UNIT", allow_hyphen_values = true)]
    pub first_unit: String,

    /// `in` to compute pace, `at` to compute time or distance
    #[arg(value_enum, ignore_case = true)]
    pub preposition: Preposition,

    /// Time (with `in`), or pace (with `at`)
    #[arg(value_name = "SECOND_UNIT", allow_hyphen_values = true)]
    pub second_unit: String,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging (to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Log filter directive used with --log (e.g. debug, pacecalc=trace)
    #[arg(long, default_value = "debug")]
    pub log_level: String,
}
