//! Product registry with append-only coverage proof ledgers.

mod context;
mod errors;
mod events;
mod registry;

pub use context::CallContext;
pub use errors::{RegistryError, RegistryResult};
pub use events::RegistryEvent;
pub use registry::{ProofRegistry, DEFAULT_EVENT_CAPACITY};
