//! Proof registry CLI

pub mod cmd;
pub mod input;

use std::process::ExitCode;

use cmd::{
    coverage::{add_coverage, count, get, range},
    hash::hash,
    product::{product, update_metadata},
    register::register,
    verify::verify,
    Commands, TopLevel,
};
use jsonrpsee::http_client::HttpClientBuilder;
use proofreg_cli_common::errors::DisplayableError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let TopLevel { rpc_url, cmd } = argh::from_env();

    let result = match cmd {
        // Offline, never touches the node.
        Commands::Hash(args) => hash(args),
        cmd => match HttpClientBuilder::default()
            .build(&rpc_url)
            .user_error(format!("Invalid RPC url '{rpc_url}'"))
        {
            Ok(client) => match cmd {
                Commands::Register(args) => register(args, &client).await,
                Commands::AddCoverage(args) => add_coverage(args, &client).await,
                Commands::Count(args) => count(args, &client).await,
                Commands::Get(args) => get(args, &client).await,
                Commands::Range(args) => range(args, &client).await,
                Commands::Verify(args) => verify(args, &client).await,
                Commands::UpdateMetadata(args) => update_metadata(args, &client).await,
                Commands::Product(args) => product(args, &client).await,
                Commands::Hash(_) => unreachable!("handled prior"),
            },
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    }
}
