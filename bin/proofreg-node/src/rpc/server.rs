//! Proof registry RPC server implementation.

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;
use jsonrpsee::core::RpcResult;
use proofreg_primitives::{Address, Bytes, CoverageIndex, ProductId, ProofHash};
use proofreg_registry::{CallContext, ProofRegistry, RegistryResult};
use proofreg_rpc_api::ProofRegistryRpcServer;
use proofreg_rpc_types::{RpcCoverage, RpcProduct, RpcProofVerification};
use tokio::task;

use crate::rpc::errors::{internal_error, invalid_params_error, registry_error};

/// Serves registry operations over JSON-RPC.
///
/// Registry calls take a blocking lock and may hit disk, so each runs on the
/// blocking pool.
pub(crate) struct ProofRegistryRpcImpl {
    registry: Arc<ProofRegistry>,

    /// Cap applied to the `limit` of range requests.
    max_coverage_page: u64,
}

impl ProofRegistryRpcImpl {
    pub(crate) fn new(registry: Arc<ProofRegistry>, max_coverage_page: u64) -> Self {
        Self {
            registry,
            max_coverage_page,
        }
    }

    async fn blocking<T, F>(&self, f: F) -> RpcResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ProofRegistry) -> RegistryResult<T> + Send + 'static,
    {
        let registry = self.registry.clone();
        task::spawn_blocking(move || f(&registry))
            .await
            .map_err(|e| internal_error(format!("spawn_blocking join error: {e}")))?
            .map_err(registry_error)
    }

    /// Builds the context for a mutating call, stamped with the node's clock.
    fn call_context(caller: Address) -> RpcResult<CallContext> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(internal_error)?;
        Ok(CallContext::new(caller, now.as_secs()))
    }
}

#[async_trait]
impl ProofRegistryRpcServer for ProofRegistryRpcImpl {
    async fn register_product(
        &self,
        caller: Address,
        metadata_uri: String,
    ) -> RpcResult<ProductId> {
        let ctx = Self::call_context(caller)?;
        self.blocking(move |reg| reg.register_product(&ctx, metadata_uri))
            .await
    }

    async fn add_coverage(
        &self,
        caller: Address,
        product_id: ProductId,
        proof_uri: String,
        proof_hash: ProofHash,
        note: String,
    ) -> RpcResult<CoverageIndex> {
        let ctx = Self::call_context(caller)?;
        self.blocking(move |reg| reg.add_coverage(&ctx, product_id, proof_uri, proof_hash, note))
            .await
    }

    async fn get_coverage_count(&self, product_id: ProductId) -> RpcResult<u64> {
        self.blocking(move |reg| reg.get_coverage_count(product_id))
            .await
    }

    async fn get_coverage(
        &self,
        product_id: ProductId,
        index: CoverageIndex,
    ) -> RpcResult<RpcCoverage> {
        let coverage = self
            .blocking(move |reg| reg.get_coverage(product_id, index))
            .await?;
        Ok(RpcCoverage::new(index, coverage))
    }

    async fn get_coverage_range(
        &self,
        product_id: ProductId,
        start: CoverageIndex,
        limit: u64,
    ) -> RpcResult<Vec<RpcCoverage>> {
        if limit == 0 {
            return Err(invalid_params_error("limit must be at least 1"));
        }
        let limit = limit.min(self.max_coverage_page);

        let page = self
            .blocking(move |reg| reg.get_coverage_range(product_id, start, limit))
            .await?;
        Ok((start..)
            .zip(page)
            .map(|(index, coverage)| RpcCoverage::new(index, coverage))
            .collect())
    }

    async fn verify_proof(
        &self,
        product_id: ProductId,
        index: CoverageIndex,
        claimed_proof: Bytes,
    ) -> RpcResult<RpcProofVerification> {
        let res = self
            .blocking(move |reg| reg.verify_proof(product_id, index, &claimed_proof))
            .await?;
        Ok(res.into())
    }

    async fn update_product_metadata(
        &self,
        caller: Address,
        product_id: ProductId,
        metadata_uri: String,
    ) -> RpcResult<()> {
        let ctx = Self::call_context(caller)?;
        self.blocking(move |reg| reg.update_product_metadata(&ctx, product_id, metadata_uri))
            .await
    }

    async fn get_product(&self, product_id: ProductId) -> RpcResult<RpcProduct> {
        let product = self
            .blocking(move |reg| reg.get_product(product_id))
            .await?;
        Ok(product.into())
    }

    async fn get_product_count(&self) -> RpcResult<u64> {
        self.blocking(|reg| reg.product_count()).await
    }
}

#[cfg(test)]
mod tests {
    use proofreg_db_store_sled::{SLED_NAME, SledDbConfig, open_sled_backend};
    use proofreg_primitives::hash_proof;
    use proofreg_registry::DEFAULT_EVENT_CAPACITY;
    use proofreg_rpc_types::{INDEX_OUT_OF_RANGE_CODE, NOT_OWNER_CODE, PRODUCT_NOT_FOUND_CODE};
    use tempfile::TempDir;

    use super::*;

    fn setup(max_page: u64) -> (TempDir, ProofRegistryRpcImpl) {
        let dir = tempfile::tempdir().unwrap();
        let backend = open_sled_backend(dir.path(), SLED_NAME, SledDbConfig::test()).unwrap();
        let registry = ProofRegistry::from_backend(backend.as_ref(), DEFAULT_EVENT_CAPACITY);
        (dir, ProofRegistryRpcImpl::new(Arc::new(registry), max_page))
    }

    #[tokio::test]
    async fn test_scenario_over_rpc() {
        let (_dir, rpc) = setup(256);
        let owner = Address::repeat_byte(0x01);
        let other = Address::repeat_byte(0x02);

        let id = rpc
            .register_product(owner, "ipfs://A".to_string())
            .await
            .unwrap();
        assert_eq!(id, ProductId::new(1));

        let index = rpc
            .add_coverage(
                other,
                id,
                "ipfs://proof1".to_string(),
                hash_proof("hello"),
                "warranty".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(rpc.get_coverage_count(id).await.unwrap(), 1);

        let coverage = rpc.get_coverage(id, 0).await.unwrap();
        assert_eq!(coverage.reporter, other);
        assert!(coverage.timestamp > 0);

        let ok = rpc
            .verify_proof(id, 0, Bytes::from_static(b"hello"))
            .await
            .unwrap();
        assert!(ok.is_valid);

        let bad = rpc
            .verify_proof(id, 0, Bytes::from_static(b"goodbye"))
            .await
            .unwrap();
        assert!(!bad.is_valid);
        assert_eq!(bad.computed_hash, hash_proof("goodbye"));

        let err = rpc
            .update_product_metadata(other, id, "ipfs://X".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.code(), NOT_OWNER_CODE);

        rpc.update_product_metadata(owner, id, "ipfs://B".to_string())
            .await
            .unwrap();
        let product = rpc.get_product(id).await.unwrap();
        assert_eq!(product.metadata_uri, "ipfs://B");
        assert_eq!(rpc.get_product_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_error_codes() {
        let (_dir, rpc) = setup(256);
        let err = rpc.get_coverage_count(ProductId::new(1)).await.unwrap_err();
        assert_eq!(err.code(), PRODUCT_NOT_FOUND_CODE);

        let id = rpc
            .register_product(Address::ZERO, "ipfs://A".to_string())
            .await
            .unwrap();
        let err = rpc.get_coverage(id, 0).await.unwrap_err();
        assert_eq!(err.code(), INDEX_OUT_OF_RANGE_CODE);
    }

    #[tokio::test]
    async fn test_range_is_capped_and_indexed() {
        let (_dir, rpc) = setup(2);
        let caller = Address::repeat_byte(0x03);
        let id = rpc
            .register_product(caller, "ipfs://A".to_string())
            .await
            .unwrap();
        for i in 0..5u8 {
            rpc.add_coverage(
                caller,
                id,
                format!("ipfs://proof{i}"),
                hash_proof([i]),
                String::new(),
            )
            .await
            .unwrap();
        }

        let page = rpc.get_coverage_range(id, 1, 100).await.unwrap();
        let indices: Vec<_> = page.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(page[1].proof_uri, "ipfs://proof2");

        assert!(rpc.get_coverage_range(id, 5, 2).await.unwrap().is_empty());
        assert!(rpc.get_coverage_range(id, 0, 0).await.is_err());
    }
}
