//! Proof registry RPC API definitions.

use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use proofreg_primitives::{Address, Bytes, CoverageIndex, ProductId, ProofHash};
use proofreg_rpc_types::*;

/// Methods served by a proof registry node.
///
/// Mutating methods take the calling account explicitly; the node stamps
/// coverage entries with its own clock.
#[cfg_attr(not(feature = "client"), rpc(server, namespace = "proofreg"))]
#[cfg_attr(feature = "client", rpc(server, client, namespace = "proofreg"))]
pub trait ProofRegistryRpc {
    /// Register a product owned by `caller`. Returns the new product id.
    #[method(name = "registerProduct")]
    async fn register_product(&self, caller: Address, metadata_uri: String)
        -> RpcResult<ProductId>;

    /// Append a coverage entry to a product's ledger. Returns the entry's index.
    #[method(name = "addCoverage")]
    async fn add_coverage(
        &self,
        caller: Address,
        product_id: ProductId,
        proof_uri: String,
        proof_hash: ProofHash,
        note: String,
    ) -> RpcResult<CoverageIndex>;

    /// Get the number of coverage entries for a product.
    #[method(name = "getCoverageCount")]
    async fn get_coverage_count(&self, product_id: ProductId) -> RpcResult<u64>;

    /// Get a single coverage entry.
    #[method(name = "getCoverage")]
    async fn get_coverage(
        &self,
        product_id: ProductId,
        index: CoverageIndex,
    ) -> RpcResult<RpcCoverage>;

    /// Get up to `limit` coverage entries starting at `start`, in index order.
    ///
    /// The server caps `limit` at its configured page size. A `start` at or past the end
    /// yields an empty list.
    #[method(name = "getCoverageRange")]
    async fn get_coverage_range(
        &self,
        product_id: ProductId,
        start: CoverageIndex,
        limit: u64,
    ) -> RpcResult<Vec<RpcCoverage>>;

    /// Hash the claimed proof bytes and compare against the stored hash.
    #[method(name = "verifyProof")]
    async fn verify_proof(
        &self,
        product_id: ProductId,
        index: CoverageIndex,
        claimed_proof: Bytes,
    ) -> RpcResult<RpcProofVerification>;

    /// Replace a product's metadata URI. Fails unless `caller` owns the product.
    #[method(name = "updateProductMetadata")]
    async fn update_product_metadata(
        &self,
        caller: Address,
        product_id: ProductId,
        metadata_uri: String,
    ) -> RpcResult<()>;

    #[method(name = "getProduct")]
    async fn get_product(&self, product_id: ProductId) -> RpcResult<RpcProduct>;

    /// Get the number of registered products.
    #[method(name = "getProductCount")]
    async fn get_product_count(&self) -> RpcResult<u64>;
}
