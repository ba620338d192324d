use proofreg_primitives::{CoverageIndex, Identity, ProductId, ProofHash};

/// Notification published after a registry mutation has been committed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryEvent {
    ProductRegistered {
        product_id: ProductId,
        owner: Identity,
        metadata_uri: String,
    },
    CoverageAdded {
        product_id: ProductId,
        coverage_index: CoverageIndex,
        reporter: Identity,
        proof_hash: ProofHash,
        proof_uri: String,
    },
    ProductMetadataUpdated {
        product_id: ProductId,
        metadata_uri: String,
    },
}

impl RegistryEvent {
    /// Product the event refers to.
    pub fn product_id(&self) -> ProductId {
        match self {
            Self::ProductRegistered { product_id, .. }
            | Self::CoverageAdded { product_id, .. }
            | Self::ProductMetadataUpdated { product_id, .. } => *product_id,
        }
    }
}
