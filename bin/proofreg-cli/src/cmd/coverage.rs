use std::path::PathBuf;

use argh::FromArgs;
use jsonrpsee::http_client::HttpClient;
use proofreg_cli_common::errors::DisplayedError;
use proofreg_primitives::{hash_proof, Address, ProductId, ProofHash};
use proofreg_rpc_api::ProofRegistryRpcClient;

use crate::{
    cmd::{print_json, rpc_error},
    input::read_proof,
};

/// Appends a coverage proof to a product's ledger
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "add-coverage")]
pub struct AddCoverageArgs {
    /// account reporting the coverage
    #[argh(option)]
    caller: Address,

    /// product id
    #[argh(positional)]
    product_id: u64,

    /// where the full proof can be retrieved
    #[argh(positional)]
    proof_uri: String,

    /// keccak256 of the proof, if already known
    #[argh(option)]
    proof_hash: Option<ProofHash>,

    /// file whose contents are the proof
    #[argh(option)]
    proof_file: Option<PathBuf>,

    /// proof bytes as hex
    #[argh(option)]
    proof_hex: Option<String>,

    /// free-form note
    #[argh(option, default = "String::new()")]
    note: String,
}

pub async fn add_coverage(
    args: AddCoverageArgs,
    client: &HttpClient,
) -> Result<(), DisplayedError> {
    let proof_hash = match args.proof_hash {
        Some(hash) if args.proof_file.is_none() && args.proof_hex.is_none() => hash,
        Some(_) => {
            return Err(DisplayedError::user(
                "Pass either a proof hash or the proof itself, not both",
            ))
        }
        None => hash_proof(read_proof(
            args.proof_file.as_ref(),
            args.proof_hex.as_deref(),
        )?),
    };

    let index = client
        .add_coverage(
            args.caller,
            ProductId::new(args.product_id),
            args.proof_uri,
            proof_hash,
            args.note,
        )
        .await
        .map_err(rpc_error("Failed to add coverage"))?;
    println!("Added coverage {index} to product {} with hash {proof_hash}", args.product_id);
    Ok(())
}

/// Prints the number of coverage entries of a product
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "count")]
pub struct CountArgs {
    /// product id
    #[argh(positional)]
    product_id: u64,
}

pub async fn count(args: CountArgs, client: &HttpClient) -> Result<(), DisplayedError> {
    let count = client
        .get_coverage_count(ProductId::new(args.product_id))
        .await
        .map_err(rpc_error("Failed to get coverage count"))?;
    println!("{count}");
    Ok(())
}

/// Prints a single coverage entry
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get")]
pub struct GetArgs {
    /// product id
    #[argh(positional)]
    product_id: u64,

    /// coverage index
    #[argh(positional)]
    index: u64,
}

pub async fn get(args: GetArgs, client: &HttpClient) -> Result<(), DisplayedError> {
    let coverage = client
        .get_coverage(ProductId::new(args.product_id), args.index)
        .await
        .map_err(rpc_error("Failed to get coverage"))?;
    print_json(&coverage)
}

/// Prints a page of coverage entries
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "range")]
pub struct RangeArgs {
    /// product id
    #[argh(positional)]
    product_id: u64,

    /// first index to return
    #[argh(option, default = "0")]
    start: u64,

    /// maximum number of entries; the node may return fewer
    #[argh(option, default = "50")]
    limit: u64,
}

pub async fn range(args: RangeArgs, client: &HttpClient) -> Result<(), DisplayedError> {
    let page = client
        .get_coverage_range(ProductId::new(args.product_id), args.start, args.limit)
        .await
        .map_err(rpc_error("Failed to get coverage range"))?;
    print_json(&page)
}
