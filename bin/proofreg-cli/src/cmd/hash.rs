use std::path::PathBuf;

use argh::FromArgs;
use proofreg_cli_common::errors::DisplayedError;
use proofreg_primitives::hash_proof;

use crate::input::read_proof;

/// Prints the keccak256 proof hash of a file or hex bytes, without contacting a node
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "hash")]
pub struct HashArgs {
    /// file to hash
    #[argh(option)]
    file: Option<PathBuf>,

    /// bytes to hash, as hex
    #[argh(option)]
    hex: Option<String>,
}

pub fn hash(args: HashArgs) -> Result<(), DisplayedError> {
    let content = read_proof(args.file.as_ref(), args.hex.as_deref())?;
    println!("{}", hash_proof(content));
    Ok(())
}
