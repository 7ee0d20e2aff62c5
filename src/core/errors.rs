use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreditError {
    #[error("Insufficient inventory for {company}: requested {requested}, available {available}")]
    InsufficientInventory {
        company: String,
        requested: u64,
        available: u64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CreditError>;
