//! Application error codes returned by the registry RPC.
//!
//! These sit in the server-defined range below the JSON-RPC reserved codes.

/// The product id was never issued.
pub const PRODUCT_NOT_FOUND_CODE: i32 = -32001;

/// The coverage index is past the end of the product's ledger.
pub const INDEX_OUT_OF_RANGE_CODE: i32 = -32002;

/// The caller does not own the product.
pub const NOT_OWNER_CODE: i32 = -32003;

/// Returns true for codes a caller can resolve by changing the request.
pub fn is_user_error_code(code: i32) -> bool {
    matches!(
        code,
        PRODUCT_NOT_FOUND_CODE | INDEX_OUT_OF_RANGE_CODE | NOT_OWNER_CODE
    )
}
