use proofreg_db_types::DbError;
use typed_sled::error::Error;

/// Converts a failed or aborted sled transaction into a [`DbError`].
pub(crate) fn to_db_error(err: Error) -> DbError {
    DbError::TransactionError(err.to_string())
}
