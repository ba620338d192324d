//! Conversions from registry failures into JSON-RPC error objects.

use std::fmt::Display;

use jsonrpsee::types::{
    ErrorObjectOwned,
    error::{INTERNAL_ERROR_CODE, INVALID_PARAMS_CODE},
};
use proofreg_registry::RegistryError;
use proofreg_rpc_types::{INDEX_OUT_OF_RANGE_CODE, NOT_OWNER_CODE, PRODUCT_NOT_FOUND_CODE};
use tracing::error;

pub(crate) fn registry_error(err: RegistryError) -> ErrorObjectOwned {
    let code = match &err {
        RegistryError::ProductNotFound(_) => PRODUCT_NOT_FOUND_CODE,
        RegistryError::IndexOutOfRange { .. } => INDEX_OUT_OF_RANGE_CODE,
        RegistryError::NotOwner { .. } => NOT_OWNER_CODE,
        RegistryError::Db(db_err) => {
            error!(%db_err, "registry storage failure");
            INTERNAL_ERROR_CODE
        }
    };
    ErrorObjectOwned::owned(code, err.to_string(), None::<()>)
}

pub(crate) fn internal_error(msg: impl Display) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(INTERNAL_ERROR_CODE, msg.to_string(), None::<()>)
}

pub(crate) fn invalid_params_error(msg: impl Display) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(INVALID_PARAMS_CODE, msg.to_string(), None::<()>)
}
