use proofreg_db_types::DbError;
use proofreg_primitives::{CoverageIndex, Identity, ProductId};
use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The id is null, was never issued, or is past the product counter.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("coverage index {index} out of range for product {product} (count {count})")]
    IndexOutOfRange {
        product: ProductId,
        index: CoverageIndex,
        count: u64,
    },

    #[error("{caller} is not the owner of product {product}")]
    NotOwner {
        product: ProductId,
        caller: Identity,
    },

    #[error("db: {0}")]
    Db(#[from] DbError),
}
