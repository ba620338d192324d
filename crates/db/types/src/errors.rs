use proofreg_primitives::ProductId;
use thiserror::Error;
use typed_sled::error::Error;

#[derive(Debug, Error, Clone)]
pub enum DbError {
    #[error("entry with idx does not exist")]
    NonExistentEntry,

    #[error("entry with idx already exists")]
    EntryAlreadyExists,

    #[error("tried to insert into {0} out-of-order index {1}")]
    OooInsert(&'static str, u64),

    #[error("missing product {0}")]
    MissingProduct(ProductId),

    #[error("coverage count for product {0} overflowed")]
    CoverageCountOverflow(ProductId),

    #[error("codec error {0}")]
    CodecError(String),

    #[error("transaction error {0}")]
    TransactionError(String),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for DbError {
    fn from(value: anyhow::Error) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<Error> for DbError {
    fn from(value: Error) -> Self {
        Self::Other(format!("sled error: {value:?}"))
    }
}
