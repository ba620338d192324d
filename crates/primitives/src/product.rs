//! Registered products.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Identity;

/// Sequential product identifier. Ids start at 1, 0 is never issued.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// The reserved id that never refers to a product.
    pub const NULL: Self = Self(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Returns the id issued after this one, or `None` on overflow.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered product.
///
/// Presence of a [`Product`] is what marks its id as registered; there is no tombstone state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    id: ProductId,
    owner: Identity,
    metadata_uri: String,
}

impl Product {
    pub fn new(id: ProductId, owner: Identity, metadata_uri: String) -> Self {
        Self {
            id,
            owner,
            metadata_uri,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Account that registered the product. Ownership never changes.
    pub fn owner(&self) -> Identity {
        self.owner
    }

    pub fn metadata_uri(&self) -> &str {
        &self.metadata_uri
    }

    pub fn is_owned_by(&self, who: &Identity) -> bool {
        &self.owner == who
    }

    /// Returns a copy of this product pointing at new metadata.
    pub fn with_metadata_uri(&self, metadata_uri: String) -> Self {
        Self {
            metadata_uri,
            ..self.clone()
        }
    }

    pub fn into_parts(self) -> (ProductId, Identity, String) {
        (self.id, self.owner, self.metadata_uri)
    }
}
