use std::path::PathBuf;

use argh::FromArgs;
use jsonrpsee::http_client::HttpClient;
use proofreg_cli_common::errors::DisplayedError;
use proofreg_primitives::{Bytes, ProductId};
use proofreg_rpc_api::ProofRegistryRpcClient;

use crate::{
    cmd::{print_json, rpc_error},
    input::read_proof,
};

/// Checks claimed proof content against a stored coverage hash
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "verify")]
pub struct VerifyArgs {
    /// product id
    #[argh(positional)]
    product_id: u64,

    /// coverage index
    #[argh(positional)]
    index: u64,

    /// file whose contents are the claimed proof
    #[argh(option)]
    file: Option<PathBuf>,

    /// claimed proof bytes as hex
    #[argh(option)]
    hex: Option<String>,
}

pub async fn verify(args: VerifyArgs, client: &HttpClient) -> Result<(), DisplayedError> {
    let claimed = read_proof(args.file.as_ref(), args.hex.as_deref())?;
    let res = client
        .verify_proof(
            ProductId::new(args.product_id),
            args.index,
            Bytes::from(claimed),
        )
        .await
        .map_err(rpc_error("Failed to verify proof"))?;
    print_json(&res)
}
