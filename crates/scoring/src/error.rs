use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Unknown scoring system: {0}")]
    UnknownScoringSystem(String),

    #[error("Unparseable time value: {0}")]
    UnparseableTime(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
