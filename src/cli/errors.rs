use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    /// A token was rejected; shown exactly as the library words it
    #[error(transparent)]
    Calculation(#[from] pacecalc::Error),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}
