use proofreg_primitives::{
    Address, Coverage, CoverageIndex, Product, ProductId, ProofHash, ProofVerification,
};
use serde::{Deserialize, Serialize};

/// A registered product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcProduct {
    /// Sequential product id, starting at 1.
    pub id: ProductId,
    /// Registering account.
    pub owner: Address,
    /// Opaque pointer to product metadata.
    pub metadata_uri: String,
}

impl From<Product> for RpcProduct {
    fn from(value: Product) -> Self {
        let (id, owner, metadata_uri) = value.into_parts();
        Self {
            id,
            owner,
            metadata_uri,
        }
    }
}

/// A coverage entry together with its position in the product's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcCoverage {
    pub index: CoverageIndex,
    pub reporter: Address,
    pub proof_uri: String,
    pub proof_hash: ProofHash,
    /// Unix seconds at which the node accepted the entry.
    pub timestamp: u64,
    pub note: String,
}

impl RpcCoverage {
    pub fn new(index: CoverageIndex, coverage: Coverage) -> Self {
        Self {
            index,
            reporter: coverage.reporter(),
            proof_uri: coverage.proof_uri().to_owned(),
            proof_hash: coverage.proof_hash(),
            timestamp: coverage.timestamp(),
            note: coverage.note().to_owned(),
        }
    }
}

/// Result of re-hashing claimed proof content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcProofVerification {
    pub is_valid: bool,
    pub stored_hash: ProofHash,
    pub computed_hash: ProofHash,
}

impl From<ProofVerification> for RpcProofVerification {
    fn from(value: ProofVerification) -> Self {
        Self {
            is_valid: value.is_valid(),
            stored_hash: value.stored_hash(),
            computed_hash: value.computed_hash(),
        }
    }
}

#[cfg(test)]
mod tests {
    use proofreg_primitives::hash_proof;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_coverage_json_shape() {
        let coverage = Coverage::new(
            Address::repeat_byte(0x11),
            "ipfs://proof1".to_string(),
            hash_proof("hello"),
            1_700_000_000,
            "warranty".to_string(),
        );
        let value = serde_json::to_value(RpcCoverage::new(0, coverage)).unwrap();

        assert_eq!(
            value,
            json!({
                "index": 0,
                "reporter": "0x1111111111111111111111111111111111111111",
                "proof_uri": "ipfs://proof1",
                "proof_hash": "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
                "timestamp": 1_700_000_000u64,
                "note": "warranty",
            })
        );
    }

    #[test]
    fn test_verification_from_mismatch() {
        let res = ProofVerification::compute(hash_proof("hello"), b"goodbye");
        let rpc = RpcProofVerification::from(res);
        assert!(!rpc.is_valid);
        assert_eq!(rpc.stored_hash, hash_proof("hello"));
        assert_eq!(rpc.computed_hash, hash_proof("goodbye"));
    }
}
