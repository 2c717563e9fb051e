use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error("No data loaded for decay chain {chain}")]
    MissingData { chain: String },

    #[error("Invalid energy grid: {0}")]
    InvalidGrid(String),

    #[error("Numerically degenerate input: {0}")]
    NumericDegenerate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SpectrumResult<T> = Result<T, SpectrumError>;
