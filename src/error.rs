//! Crate-level error type and `Result` alias.
//! Every parser failure names the offending token and the kind of input it was
//! read as, so the CLI can report it verbatim.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The kind of measurement a token was parsed as.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputKind {
    Distance,
    Time,
    Pace,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Distance => write!(f, "distance"),
            InputKind::Time => write!(f, "time"),
            InputKind::Pace => write!(f, "pace"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{token} is not a valid input for distance")]
    InvalidDistance { token: String },

    #[error("{token} is not a valid input for time")]
    InvalidTime { token: String },

    #[error("{token} is not a valid input for pace")]
    InvalidPace { token: String },
}

impl Error {
    pub fn distance(token: &str) -> Self {
        Error::InvalidDistance {
            token: token.to_string(),
        }
    }

    pub fn time(token: &str) -> Self {
        Error::InvalidTime {
            token: token.to_string(),
        }
    }

    pub fn pace(token: &str) -> Self {
        Error::InvalidPace {
            token: token.to_string(),
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Error::InvalidDistance { .. } => InputKind::Distance,
            Error::InvalidTime { .. } => InputKind::Time,
            Error::InvalidPace { .. } => InputKind::Pace,
        }
    }

    /// The raw token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            Error::InvalidDistance { token }
            | Error::InvalidTime { token }
            | Error::InvalidPace { token } => token,
        }
    }
}
