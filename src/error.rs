use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("unknown play: {play_id}")]
    UnknownPlay { play_id: String },
    #[error("unknown type: {genre}")]
    UnsupportedGenre { genre: String },
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, BillingError>;
