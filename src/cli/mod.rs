//! Command Line Interface (CLI) layer for pacecalc.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for a single calculation. It wires
//! user-provided tokens to the library functionality exposed via
//! `pacecalc::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
