use argh::FromArgs;
use jsonrpsee::http_client::HttpClient;
use proofreg_cli_common::errors::DisplayedError;
use proofreg_primitives::Address;
use proofreg_rpc_api::ProofRegistryRpcClient;

use crate::cmd::rpc_error;

/// Registers a new product owned by the caller
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "register")]
pub struct RegisterArgs {
    /// account registering the product
    #[argh(option)]
    caller: Address,

    /// pointer to the product metadata
    #[argh(positional)]
    metadata_uri: String,
}

pub async fn register(args: RegisterArgs, client: &HttpClient) -> Result<(), DisplayedError> {
    let id = client
        .register_product(args.caller, args.metadata_uri)
        .await
        .map_err(rpc_error("Failed to register product"))?;
    println!("Registered product {id}");
    Ok(())
}
