//! Trait definitions for low level database interfaces.

use std::sync::Arc;

use proofreg_primitives::{Coverage, CoverageIndex, Product, ProductId};

use crate::DbResult;

/// Common database backend interface that the registry can be built on top of.
pub trait DatabaseBackend: Send + Sync {
    fn product_db(&self) -> Arc<impl ProductDatabase>;
    fn coverage_db(&self) -> Arc<impl CoverageDatabase>;
}

/// Database interface for registered products.
pub trait ProductDatabase: Send + Sync + 'static {
    /// Inserts a newly registered product.
    ///
    /// Products must be inserted in id order, the first one at id 1. Fails with
    /// [`DbError::OooInsert`](crate::DbError::OooInsert) otherwise.
    fn put_product(&self, product: Product) -> DbResult<()>;

    /// Gets a product by id, if it was registered.
    fn get_product(&self, id: ProductId) -> DbResult<Option<Product>>;

    /// Gets the highest registered product id, [`ProductId::NULL`] when there are none.
    fn get_last_product_id(&self) -> DbResult<ProductId>;

    /// Replaces the metadata URI of an existing product.
    fn set_product_metadata(&self, id: ProductId, metadata_uri: String) -> DbResult<()>;
}

/// Database interface for per-product coverage ledgers.
pub trait CoverageDatabase: Send + Sync + 'static {
    /// Appends a coverage entry, which must land at `idx`.
    ///
    /// The entry and the new ledger length are written atomically.
    fn append_coverage(&self, id: ProductId, idx: CoverageIndex, coverage: Coverage)
        -> DbResult<()>;

    /// Gets the number of coverage entries for a product. Zero for untouched ledgers.
    fn get_coverage_count(&self, id: ProductId) -> DbResult<u64>;

    /// Gets a single coverage entry.
    fn get_coverage(&self, id: ProductId, idx: CoverageIndex) -> DbResult<Option<Coverage>>;

    /// Gets entries with index in `start_idx..end_idx`, in index order.
    fn get_coverage_range(
        &self,
        id: ProductId,
        start_idx: CoverageIndex,
        end_idx: CoverageIndex,
    ) -> DbResult<Vec<Coverage>>;
}
