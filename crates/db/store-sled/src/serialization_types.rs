//! Borsh-encoded representations of registry records.
//!
//! Addresses and hashes are stored as raw byte arrays so the on-disk layout does not depend on
//! any serde or borsh support in the primitive types.

use borsh::{BorshDeserialize, BorshSerialize};
use proofreg_primitives::{Address, Coverage, Product, ProductId, B256};

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub(crate) struct DBProduct {
    owner: [u8; 20],
    metadata_uri: String,
}

impl DBProduct {
    pub(crate) fn with_metadata_uri(self, metadata_uri: String) -> Self {
        Self {
            metadata_uri,
            ..self
        }
    }

    /// Rebuilds the product stored under `id`.
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product::new(id, Address::from(self.owner), self.metadata_uri)
    }
}

impl From<Product> for DBProduct {
    fn from(value: Product) -> Self {
        let (_, owner, metadata_uri) = value.into_parts();
        Self {
            owner: owner.0.0,
            metadata_uri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub(crate) struct DBCoverage {
    reporter: [u8; 20],
    proof_uri: String,
    proof_hash: [u8; 32],
    timestamp: u64,
    note: String,
}

impl From<Coverage> for DBCoverage {
    fn from(value: Coverage) -> Self {
        Self {
            reporter: value.reporter().0.0,
            proof_uri: value.proof_uri().to_owned(),
            proof_hash: value.proof_hash().0,
            timestamp: value.timestamp(),
            note: value.note().to_owned(),
        }
    }
}

impl From<DBCoverage> for Coverage {
    fn from(value: DBCoverage) -> Self {
        Coverage::new(
            Address::from(value.reporter),
            value.proof_uri,
            B256::from(value.proof_hash),
            value.timestamp,
            value.note,
        )
    }
}
