use crate::engine::InvalidInput;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LendscoreError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("batch file not found: {0}")]
    BatchNotFound(String),

    #[error("batch file error: {0}")]
    BatchParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LendscoreError>;
