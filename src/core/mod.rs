//! Core parsing and formatting building blocks: token parsers for distance,
//! time and pace, the duration formatter, and the constant unit tables they
//! share. These are the primitives consumed by the high-level `api` module.
pub mod distance;
pub mod duration;
pub mod number;
pub mod pace;
pub mod params;
pub mod time;
pub mod units;
