//! Error handling for the resume scan client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Response parse error: {0}")]
    ResponseParse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScanError>;

/// Convert reqwest errors to our custom error type
impl From<reqwest::Error> for ResumeScanError {
    fn from(err: reqwest::Error) -> Self {
        ResumeScanError::Network(err.to_string())
    }
}

/// Convert askama rendering errors to our custom error type
impl From<askama::Error> for ResumeScanError {
    fn from(err: askama::Error) -> Self {
        ResumeScanError::OutputFormatting(err.to_string())
    }
}
