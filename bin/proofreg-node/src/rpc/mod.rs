//! RPC server setup.

mod errors;
mod server;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Result, anyhow};
use jsonrpsee::{
    RpcModule,
    server::{ServerBuilder, ServerHandle},
};
use proofreg_config::Config;
use proofreg_registry::ProofRegistry;
use proofreg_rpc_api::ProofRegistryRpcServer;
use tracing::info;

use self::server::ProofRegistryRpcImpl;

/// Builds the RPC module and starts serving it, returning the handle that stops the server.
pub(crate) async fn start_rpc(config: &Config, registry: Arc<ProofRegistry>) -> Result<ServerHandle> {
    let mut module = RpcModule::new(());

    let registry_rpc = ProofRegistryRpcImpl::new(registry, config.registry.max_coverage_page);
    module
        .merge(ProofRegistryRpcServer::into_rpc(registry_rpc))
        .map_err(|e| anyhow!("Failed to merge registry RPC module: {}", e))?;

    let addr = format!("{}:{}", config.client.rpc_host, config.client.rpc_port);
    let rpc_server = ServerBuilder::new()
        .build(&addr)
        .await
        .map_err(|e| anyhow!("Failed to build RPC server on {addr}: {e}"))?;

    let local_addr: SocketAddr = rpc_server.local_addr()?;
    let handle = rpc_server.start(module);
    info!(%local_addr, "started RPC server");

    Ok(handle)
}
