use mtrack_store::error::StoreError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No usable snapshot: {0}")]
    EmptyCollection(String),

    #[error("Validation rejected: {0}")]
    ValidationRejected(#[from] garde::Report),

    #[error("Record not found: {0}")]
    NotFound(i64),

    #[error("Invalid backup document: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Backup document rejected: {0}")]
    InvalidBackup(String),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("No free record id left")]
    IdsExhausted,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
