use argh::FromArgs;
use jsonrpsee::core::client::Error as ClientError;
use proofreg_cli_common::errors::{DisplayableError, DisplayedError};
use proofreg_rpc_types::is_user_error_code;
use serde::Serialize;

pub mod coverage;
pub mod hash;
pub mod product;
pub mod register;
pub mod verify;

/// Default endpoint of a locally running node.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Proof registry CLI
#[derive(FromArgs, PartialEq, Debug)]
pub struct TopLevel {
    /// node RPC endpoint
    #[argh(option, default = "DEFAULT_RPC_URL.to_string()")]
    pub rpc_url: String,

    #[argh(subcommand)]
    pub cmd: Commands,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum Commands {
    Register(register::RegisterArgs),
    AddCoverage(coverage::AddCoverageArgs),
    Count(coverage::CountArgs),
    Get(coverage::GetArgs),
    Range(coverage::RangeArgs),
    Verify(verify::VerifyArgs),
    UpdateMetadata(product::UpdateMetadataArgs),
    Product(product::ProductArgs),
    Hash(hash::HashArgs),
}

/// Maps a failed RPC call to a displayed error.
///
/// Rejections the registry raises because of the request itself are user errors; transport
/// and server failures are internal.
pub fn rpc_error(msg: impl Into<String>) -> impl FnOnce(ClientError) -> DisplayedError {
    let msg = msg.into();
    move |e| {
        let rejection = match &e {
            ClientError::Call(obj) if is_user_error_code(obj.code()) => {
                Some(format!("{msg}: {}", obj.message()))
            }
            _ => None,
        };
        match rejection {
            Some(user_msg) => DisplayedError::UserError(user_msg, Box::new(e)),
            None => DisplayedError::InternalError(msg, Box::new(e)),
        }
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), DisplayedError> {
    let out = serde_json::to_string_pretty(value).internal_error("Failed to encode output")?;
    println!("{out}");
    Ok(())
}
