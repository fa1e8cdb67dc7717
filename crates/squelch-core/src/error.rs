use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquelchError {
    #[error("Invalid collapse pattern: {0}")]
    Pattern(String),
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Key file error: {0}")]
    KeyFile(String),
    #[error("Signing error: {0}")]
    Signing(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SquelchError>;
