//! Core data types shared by the proof registry crates.

pub mod coverage;
pub mod hash;
pub mod product;

pub use alloy_primitives::{Address, Bytes, B256};
pub use coverage::{Coverage, ProofVerification};
pub use hash::{hash_proof, ProofHash};
pub use product::{Product, ProductId};

/// Account that registers products and reports coverage.
pub type Identity = Address;

/// Position of a coverage entry within a product's ledger.
pub type CoverageIndex = u64;
