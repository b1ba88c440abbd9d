use thiserror::Error;

pub type Result<T> = std::result::Result<T, RatingError>;

#[derive(Debug, Error)]
pub enum RatingError {
    #[error("No valid data found. {guidance}")]
    EmptyInput { guidance: String },

    #[error("Invalid score record: {reason}")]
    InvalidRecord { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Error computing ratings in round {round_seq}: {reason}")]
    ComputationFailure { round_seq: i64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read or write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error)
}

impl RatingError {
    pub fn empty_input() -> Self {
        RatingError::EmptyInput {
            guidance: "Make sure you have a \"Name\" column and score columns.".to_string()
        }
    }
}
