//! Proof content hashing.

use alloy_primitives::{keccak256, B256};

/// 32-byte keccak256 digest of proof content.
pub type ProofHash = B256;

/// Hashes proof content exactly as supplied.
///
/// No canonicalization happens here, so callers must hash the same serialization they submit
/// when verifying.
pub fn hash_proof(content: impl AsRef<[u8]>) -> ProofHash {
    keccak256(content)
}
