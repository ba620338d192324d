//! Types for the JSON-RPC API.

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
