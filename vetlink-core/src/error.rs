use thiserror::Error;

#[derive(Error, Debug)]
pub enum VetError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No candidates found in {0}")]
    NoCandidates(String),
}

pub type Result<T> = std::result::Result<T, VetError>;
