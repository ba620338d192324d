//! The [`ProofRegistry`] and its operations.

use std::sync::Arc;

use parking_lot::RwLock;
use proofreg_db_types::{
    traits::{CoverageDatabase, DatabaseBackend, ProductDatabase},
    DbError,
};
use proofreg_primitives::{
    Coverage, CoverageIndex, Product, ProductId, ProofHash, ProofVerification,
};
use tokio::sync::broadcast;
use tracing::*;

use crate::{CallContext, RegistryError, RegistryEvent, RegistryResult};

/// Default number of undelivered events kept per subscriber before it starts lagging.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Registry of products and their coverage proof ledgers.
///
/// Mutations are serialized behind a single write lock, reads share the read lock so they never
/// see a half-applied mutation. Events go out after the mutation is committed and before the
/// lock is released, so subscribers observe them in commit order.
#[expect(
    missing_debug_implementations,
    reason = "database trait objects don't implement Debug"
)]
pub struct ProofRegistry {
    product_db: Arc<dyn ProductDatabase>,
    coverage_db: Arc<dyn CoverageDatabase>,
    lock: RwLock<()>,
    events: broadcast::Sender<RegistryEvent>,
}

impl ProofRegistry {
    pub fn new(
        product_db: Arc<dyn ProductDatabase>,
        coverage_db: Arc<dyn CoverageDatabase>,
        event_capacity: usize,
    ) -> Self {
        let (events, _) = broadcast::channel(event_capacity.max(1));
        Self {
            product_db,
            coverage_db,
            lock: RwLock::new(()),
            events,
        }
    }

    /// Creates a registry over the databases of `backend`.
    pub fn from_backend(backend: &impl DatabaseBackend, event_capacity: usize) -> Self {
        Self::new(backend.product_db(), backend.coverage_db(), event_capacity)
    }

    /// Subscribes to events of mutations committed from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    /// Registers a new product owned by the caller, returning its id.
    ///
    /// Ids are issued sequentially starting at 1.
    pub fn register_product(
        &self,
        ctx: &CallContext,
        metadata_uri: String,
    ) -> RegistryResult<ProductId> {
        let _guard = self.lock.write();

        let id = self
            .product_db
            .get_last_product_id()?
            .next()
            .ok_or_else(|| DbError::Other("product id space exhausted".to_string()))?;

        let owner = ctx.caller();
        self.product_db
            .put_product(Product::new(id, owner, metadata_uri.clone()))?;
        info!(product_id = %id, %owner, %metadata_uri, "registered product");

        self.emit(RegistryEvent::ProductRegistered {
            product_id: id,
            owner,
            metadata_uri,
        });
        Ok(id)
    }

    /// Appends a coverage entry reported by the caller, returning its index.
    ///
    /// Anyone may report coverage for any registered product.
    pub fn add_coverage(
        &self,
        ctx: &CallContext,
        product_id: ProductId,
        proof_uri: String,
        proof_hash: ProofHash,
        note: String,
    ) -> RegistryResult<CoverageIndex> {
        let _guard = self.lock.write();

        self.ensure_product(product_id)?;
        let index = self.coverage_db.get_coverage_count(product_id)?;

        let reporter = ctx.caller();
        let coverage = Coverage::new(
            reporter,
            proof_uri.clone(),
            proof_hash,
            ctx.timestamp(),
            note,
        );
        self.coverage_db
            .append_coverage(product_id, index, coverage)?;
        info!(%product_id, %index, %reporter, %proof_hash, "added coverage");

        self.emit(RegistryEvent::CoverageAdded {
            product_id,
            coverage_index: index,
            reporter,
            proof_hash,
            proof_uri,
        });
        Ok(index)
    }

    /// Returns the number of coverage entries recorded for a product.
    pub fn get_coverage_count(&self, product_id: ProductId) -> RegistryResult<u64> {
        let _guard = self.lock.read();
        self.ensure_product(product_id)?;
        Ok(self.coverage_db.get_coverage_count(product_id)?)
    }

    /// Returns the coverage entry at `index`.
    pub fn get_coverage(
        &self,
        product_id: ProductId,
        index: CoverageIndex,
    ) -> RegistryResult<Coverage> {
        let _guard = self.lock.read();
        self.coverage_at(product_id, index)
    }

    /// Hashes `claimed_proof` and compares it with the hash stored at `index`.
    ///
    /// A mismatch is not an error; both hashes are returned either way.
    pub fn verify_proof(
        &self,
        product_id: ProductId,
        index: CoverageIndex,
        claimed_proof: &[u8],
    ) -> RegistryResult<ProofVerification> {
        let coverage = {
            let _guard = self.lock.read();
            self.coverage_at(product_id, index)?
        };

        let res = coverage.verify(claimed_proof);
        debug!(%product_id, %index, is_valid = res.is_valid(), "verified proof");
        Ok(res)
    }

    /// Replaces a product's metadata URI. Only the owner may do this.
    pub fn update_product_metadata(
        &self,
        ctx: &CallContext,
        product_id: ProductId,
        metadata_uri: String,
    ) -> RegistryResult<()> {
        let _guard = self.lock.write();

        let product = self.product(product_id)?;
        let caller = ctx.caller();
        if !product.is_owned_by(&caller) {
            return Err(RegistryError::NotOwner {
                product: product_id,
                caller,
            });
        }

        self.product_db
            .set_product_metadata(product_id, metadata_uri.clone())?;
        info!(%product_id, %metadata_uri, "updated product metadata");

        self.emit(RegistryEvent::ProductMetadataUpdated {
            product_id,
            metadata_uri,
        });
        Ok(())
    }

    pub fn get_product(&self, product_id: ProductId) -> RegistryResult<Product> {
        let _guard = self.lock.read();
        self.product(product_id)
    }

    /// Returns the number of registered products, which is also the highest issued id.
    pub fn product_count(&self) -> RegistryResult<u64> {
        let _guard = self.lock.read();
        Ok(self.product_db.get_last_product_id()?.as_u64())
    }

    /// Returns up to `limit` coverage entries starting at index `start`.
    ///
    /// Starting at or past the end yields an empty page rather than an error.
    pub fn get_coverage_range(
        &self,
        product_id: ProductId,
        start: CoverageIndex,
        limit: u64,
    ) -> RegistryResult<Vec<Coverage>> {
        let _guard = self.lock.read();
        self.ensure_product(product_id)?;

        let count = self.coverage_db.get_coverage_count(product_id)?;
        let end = start.saturating_add(limit).min(count);
        if start >= end {
            return Ok(Vec::new());
        }
        Ok(self
            .coverage_db
            .get_coverage_range(product_id, start, end)?)
    }

    fn product(&self, product_id: ProductId) -> RegistryResult<Product> {
        if product_id.is_null() {
            return Err(RegistryError::ProductNotFound(product_id));
        }
        self.product_db
            .get_product(product_id)?
            .ok_or(RegistryError::ProductNotFound(product_id))
    }

    fn ensure_product(&self, product_id: ProductId) -> RegistryResult<()> {
        self.product(product_id).map(|_| ())
    }

    fn coverage_at(
        &self,
        product_id: ProductId,
        index: CoverageIndex,
    ) -> RegistryResult<Coverage> {
        self.ensure_product(product_id)?;

        let count = self.coverage_db.get_coverage_count(product_id)?;
        if index >= count {
            return Err(RegistryError::IndexOutOfRange {
                product: product_id,
                index,
                count,
            });
        }

        let Some(coverage) = self.coverage_db.get_coverage(product_id, index)? else {
            error!(%product_id, %index, %count, "coverage entry missing below ledger length");
            return Err(DbError::NonExistentEntry.into());
        };
        Ok(coverage)
    }

    fn emit(&self, event: RegistryEvent) {
        if self.events.send(event).is_err() {
            trace!("no registry event subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, thread};

    use proofreg_db_store_sled::{SledBackend, SledDbConfig};
    use proofreg_primitives::{hash_proof, Address, Identity};
    use proptest::prelude::*;
    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;

    fn setup_registry() -> ProofRegistry {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let sled_db = typed_sled::SledDb::new(db).unwrap();
        let backend = SledBackend::new(sled_db.into(), SledDbConfig::test()).unwrap();
        ProofRegistry::from_backend(&backend, DEFAULT_EVENT_CAPACITY)
    }

    fn owner() -> Identity {
        Address::repeat_byte(0xaa)
    }

    fn inspector() -> Identity {
        Address::repeat_byte(0xbb)
    }

    fn ctx(caller: Identity) -> CallContext {
        CallContext::new(caller, 1_700_000_000)
    }

    #[test]
    fn test_end_to_end_scenario() {
        let registry = setup_registry();
        let owner_ctx = ctx(owner());

        let id = registry
            .register_product(&owner_ctx, "ipfs://A".to_string())
            .unwrap();
        assert_eq!(id, ProductId::new(1));

        let idx = registry
            .add_coverage(
                &owner_ctx,
                id,
                "ipfs://proof1".to_string(),
                hash_proof("hello"),
                "warranty".to_string(),
            )
            .unwrap();
        assert_eq!(idx, 0);
        assert_eq!(registry.get_coverage_count(id).unwrap(), 1);

        let res = registry.verify_proof(id, 0, b"hello").unwrap();
        assert!(res.is_valid());
        assert_eq!(res.stored_hash(), hash_proof("hello"));
        assert_eq!(res.computed_hash(), hash_proof("hello"));

        let res = registry.verify_proof(id, 0, b"goodbye").unwrap();
        assert!(!res.is_valid());
        assert_eq!(res.stored_hash(), hash_proof("hello"));
        assert_eq!(res.computed_hash(), hash_proof("goodbye"));

        registry
            .update_product_metadata(&owner_ctx, id, "ipfs://B".to_string())
            .unwrap();
        assert_eq!(registry.get_product(id).unwrap().metadata_uri(), "ipfs://B");
    }

    #[test]
    fn test_coverage_records_context() {
        let registry = setup_registry();
        let id = registry
            .register_product(&ctx(owner()), "ipfs://A".to_string())
            .unwrap();

        let report_ctx = CallContext::new(inspector(), 42);
        registry
            .add_coverage(
                &report_ctx,
                id,
                "ipfs://proof1".to_string(),
                hash_proof("hello"),
                "inspected".to_string(),
            )
            .unwrap();

        let coverage = registry.get_coverage(id, 0).unwrap();
        assert_eq!(coverage.reporter(), inspector());
        assert_eq!(coverage.timestamp(), 42);
        assert_eq!(coverage.proof_uri(), "ipfs://proof1");
        assert_eq!(coverage.note(), "inspected");

        // reads are stable
        assert_eq!(registry.get_coverage(id, 0).unwrap(), coverage);
    }

    #[test]
    fn test_unknown_product_rejected_everywhere() {
        let registry = setup_registry();
        registry
            .register_product(&ctx(owner()), "ipfs://A".to_string())
            .unwrap();

        for raw in [0u64, 2, u64::MAX] {
            let id = ProductId::new(raw);
            let not_found = |err: RegistryError| {
                matches!(err, RegistryError::ProductNotFound(missing) if missing == id)
            };

            assert!(not_found(registry.get_coverage_count(id).unwrap_err()));
            assert!(not_found(registry.get_coverage(id, 0).unwrap_err()));
            assert!(not_found(registry.get_product(id).unwrap_err()));
            assert!(not_found(
                registry.get_coverage_range(id, 0, 10).unwrap_err()
            ));
            assert!(not_found(
                registry
                    .add_coverage(
                        &ctx(owner()),
                        id,
                        "ipfs://p".to_string(),
                        hash_proof("x"),
                        String::new(),
                    )
                    .unwrap_err()
            ));
            assert!(not_found(registry.verify_proof(id, 0, b"x").unwrap_err()));
            assert!(not_found(
                registry
                    .update_product_metadata(&ctx(owner()), id, "ipfs://B".to_string())
                    .unwrap_err()
            ));
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let registry = setup_registry();
        let id = registry
            .register_product(&ctx(owner()), "ipfs://A".to_string())
            .unwrap();

        let err = registry.get_coverage(id, 0).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::IndexOutOfRange {
                index: 0,
                count: 0,
                ..
            }
        ));

        registry
            .add_coverage(
                &ctx(owner()),
                id,
                "ipfs://p".to_string(),
                hash_proof("x"),
                String::new(),
            )
            .unwrap();

        let err = registry.verify_proof(id, 1, b"x").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::IndexOutOfRange {
                index: 1,
                count: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_only_owner_updates_metadata() {
        let registry = setup_registry();
        let id = registry
            .register_product(&ctx(owner()), "ipfs://A".to_string())
            .unwrap();
        let mut events = registry.subscribe();

        let err = registry
            .update_product_metadata(&ctx(inspector()), id, "ipfs://evil".to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::NotOwner { product, caller } if product == id && caller == inspector()
        ));
        assert_eq!(registry.get_product(id).unwrap().metadata_uri(), "ipfs://A");
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

        // non-owners may still report coverage
        registry
            .add_coverage(
                &ctx(inspector()),
                id,
                "ipfs://p".to_string(),
                hash_proof("x"),
                String::new(),
            )
            .unwrap();
        assert_eq!(registry.get_coverage_count(id).unwrap(), 1);
    }

    #[test]
    fn test_events_follow_commit_order() {
        let registry = setup_registry();
        let mut events = registry.subscribe();

        let id = registry
            .register_product(&ctx(owner()), "ipfs://A".to_string())
            .unwrap();
        registry
            .add_coverage(
                &ctx(inspector()),
                id,
                "ipfs://proof1".to_string(),
                hash_proof("hello"),
                "warranty".to_string(),
            )
            .unwrap();
        registry
            .update_product_metadata(&ctx(owner()), id, "ipfs://B".to_string())
            .unwrap();

        assert_eq!(
            events.try_recv().unwrap(),
            RegistryEvent::ProductRegistered {
                product_id: id,
                owner: owner(),
                metadata_uri: "ipfs://A".to_string(),
            }
        );
        assert_eq!(
            events.try_recv().unwrap(),
            RegistryEvent::CoverageAdded {
                product_id: id,
                coverage_index: 0,
                reporter: inspector(),
                proof_hash: hash_proof("hello"),
                proof_uri: "ipfs://proof1".to_string(),
            }
        );
        assert_eq!(
            events.try_recv().unwrap(),
            RegistryEvent::ProductMetadataUpdated {
                product_id: id,
                metadata_uri: "ipfs://B".to_string(),
            }
        );
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_failed_call_emits_nothing() {
        let registry = setup_registry();
        let mut events = registry.subscribe();

        let res = registry.add_coverage(
            &ctx(owner()),
            ProductId::new(1),
            "ipfs://p".to_string(),
            hash_proof("x"),
            String::new(),
        );
        assert!(res.is_err());
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_coverage_range_pages() {
        let registry = setup_registry();
        let id = registry
            .register_product(&ctx(owner()), "ipfs://A".to_string())
            .unwrap();
        for n in 0..7u64 {
            registry
                .add_coverage(
                    &ctx(owner()),
                    id,
                    format!("ipfs://proof{n}"),
                    hash_proof(n.to_be_bytes()),
                    String::new(),
                )
                .unwrap();
        }

        let page = registry.get_coverage_range(id, 2, 3).unwrap();
        let uris: Vec<_> = page.iter().map(|c| c.proof_uri().to_owned()).collect();
        assert_eq!(uris, ["ipfs://proof2", "ipfs://proof3", "ipfs://proof4"]);

        assert_eq!(registry.get_coverage_range(id, 5, 10).unwrap().len(), 2);
        assert!(registry.get_coverage_range(id, 7, 10).unwrap().is_empty());
        assert!(registry.get_coverage_range(id, 0, 0).unwrap().is_empty());
        assert_eq!(
            registry.get_coverage_range(id, 3, u64::MAX).unwrap().len(),
            4
        );
    }

    #[test]
    fn test_concurrent_appends_are_dense() {
        let registry = setup_registry();
        let id = registry
            .register_product(&ctx(owner()), "ipfs://A".to_string())
            .unwrap();

        let threads = 4u64;
        let per_thread = 25u64;
        let indices: Vec<CoverageIndex> = thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let registry = &registry;
                    s.spawn(move || {
                        (0..per_thread)
                            .map(|n| {
                                registry
                                    .add_coverage(
                                        &ctx(Address::repeat_byte(t as u8)),
                                        id,
                                        format!("ipfs://{t}/{n}"),
                                        hash_proof(format!("{t}/{n}")),
                                        String::new(),
                                    )
                                    .unwrap()
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let total = threads * per_thread;
        let unique: BTreeSet<_> = indices.iter().copied().collect();
        assert_eq!(unique, (0..total).collect::<BTreeSet<_>>());
        assert_eq!(registry.get_coverage_count(id).unwrap(), total);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn test_ids_and_indices_are_sequential(
            ops in proptest::collection::vec((0usize..4, any::<bool>()), 1..40),
        ) {
            let registry = setup_registry();
            let mut counts: Vec<u64> = Vec::new();

            for (target, register) in ops {
                if register || counts.is_empty() {
                    let id = registry
                        .register_product(&ctx(owner()), "ipfs://A".to_string())
                        .unwrap();
                    counts.push(0);
                    prop_assert_eq!(id.as_u64(), counts.len() as u64);
                } else {
                    let slot = target % counts.len();
                    let id = ProductId::new(slot as u64 + 1);
                    let idx = registry
                        .add_coverage(
                            &ctx(inspector()),
                            id,
                            "ipfs://p".to_string(),
                            hash_proof(counts[slot].to_be_bytes()),
                            String::new(),
                        )
                        .unwrap();
                    prop_assert_eq!(idx, counts[slot]);
                    counts[slot] += 1;
                }
            }

            prop_assert_eq!(registry.product_count().unwrap(), counts.len() as u64);
            for (slot, count) in counts.iter().enumerate() {
                let id = ProductId::new(slot as u64 + 1);
                prop_assert_eq!(registry.get_coverage_count(id).unwrap(), *count);
            }
        }

        #[test]
        fn test_verify_round_trip(
            content in proptest::collection::vec(any::<u8>(), 0..512),
            other in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let registry = setup_registry();
            let id = registry
                .register_product(&ctx(owner()), "ipfs://A".to_string())
                .unwrap();
            registry
                .add_coverage(
                    &ctx(owner()),
                    id,
                    "ipfs://p".to_string(),
                    hash_proof(&content),
                    String::new(),
                )
                .unwrap();

            let res = registry.verify_proof(id, 0, &content).unwrap();
            prop_assert!(res.is_valid());
            prop_assert_eq!(res.computed_hash(), hash_proof(&content));

            let res = registry.verify_proof(id, 0, &other).unwrap();
            prop_assert_eq!(res.is_valid(), other == content);
            prop_assert_eq!(res.stored_hash(), hash_proof(&content));
            prop_assert_eq!(res.computed_hash(), hash_proof(&other));
        }
    }
}
