use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorifyError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Item not found: {0}")]
    SaleNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScorifyError {
    pub fn input(message: impl Into<String>) -> Self {
        ScorifyError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ScorifyError>;
