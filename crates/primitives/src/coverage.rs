//! Coverage records and proof verification results.

use crate::{hash_proof, Identity, ProofHash};

/// An immutable attestation appended to a product's coverage ledger.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coverage {
    reporter: Identity,
    proof_uri: String,
    proof_hash: ProofHash,
    timestamp: u64,
    note: String,
}

impl Coverage {
    pub fn new(
        reporter: Identity,
        proof_uri: String,
        proof_hash: ProofHash,
        timestamp: u64,
        note: String,
    ) -> Self {
        Self {
            reporter,
            proof_uri,
            proof_hash,
            timestamp,
            note,
        }
    }

    /// Account that submitted the coverage. Not necessarily the product owner.
    pub fn reporter(&self) -> Identity {
        self.reporter
    }

    pub fn proof_uri(&self) -> &str {
        &self.proof_uri
    }

    pub fn proof_hash(&self) -> ProofHash {
        self.proof_hash
    }

    /// Seconds since the unix epoch, as supplied by the submitting context.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Checks claimed proof content against the stored hash.
    pub fn verify(&self, claimed_proof: &[u8]) -> ProofVerification {
        ProofVerification::compute(self.proof_hash, claimed_proof)
    }
}

/// Outcome of re-hashing claimed proof content.
///
/// Both digests are always present so callers can diagnose a mismatch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ProofVerification {
    is_valid: bool,
    stored_hash: ProofHash,
    computed_hash: ProofHash,
}

impl ProofVerification {
    pub fn compute(stored_hash: ProofHash, claimed_proof: &[u8]) -> Self {
        let computed_hash = hash_proof(claimed_proof);
        Self {
            is_valid: computed_hash == stored_hash,
            stored_hash,
            computed_hash,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn stored_hash(&self) -> ProofHash {
        self.stored_hash
    }

    pub fn computed_hash(&self) -> ProofHash {
        self.computed_hash
    }
}
