use argh::FromArgs;
use jsonrpsee::http_client::HttpClient;
use proofreg_cli_common::errors::DisplayedError;
use proofreg_primitives::{Address, ProductId};
use proofreg_rpc_api::ProofRegistryRpcClient;

use crate::cmd::{print_json, rpc_error};

/// Prints a registered product
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "product")]
pub struct ProductArgs {
    /// product id; omit to print the number of products
    #[argh(positional)]
    product_id: Option<u64>,
}

pub async fn product(args: ProductArgs, client: &HttpClient) -> Result<(), DisplayedError> {
    match args.product_id {
        Some(id) => {
            let product = client
                .get_product(ProductId::new(id))
                .await
                .map_err(rpc_error("Failed to get product"))?;
            print_json(&product)
        }
        None => {
            let count = client
                .get_product_count()
                .await
                .map_err(rpc_error("Failed to get product count"))?;
            println!("{count}");
            Ok(())
        }
    }
}

/// Replaces a product's metadata URI; only the owner may do this
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "update-metadata")]
pub struct UpdateMetadataArgs {
    /// account making the change
    #[argh(option)]
    caller: Address,

    /// product id
    #[argh(positional)]
    product_id: u64,

    /// new metadata pointer
    #[argh(positional)]
    metadata_uri: String,
}

pub async fn update_metadata(
    args: UpdateMetadataArgs,
    client: &HttpClient,
) -> Result<(), DisplayedError> {
    client
        .update_product_metadata(args.caller, ProductId::new(args.product_id), args.metadata_uri)
        .await
        .map_err(rpc_error("Failed to update product metadata"))?;
    println!("Updated metadata of product {}", args.product_id);
    Ok(())
}
