//! Database abstractions for the proof registry.

pub mod errors;
pub mod traits;

pub use errors::DbError;

pub type DbResult<T> = Result<T, DbError>;
