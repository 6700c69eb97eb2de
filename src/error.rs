use thiserror::Error;

#[derive(Error, Debug)]
pub enum FirError {
    #[error("Invalid filter specification: {0}")]
    InvalidSpecification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid sample on line {line}: {value:?}")]
    Parse { line: usize, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FirError>;
