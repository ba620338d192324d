//! Proof registry node entrypoint.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use argh::from_env;
use proofreg_common::logging;
use proofreg_config::{Config, LogRotation};
use proofreg_registry::ProofRegistry;
use tokio::{runtime, signal};
use tracing::{error, info};

use crate::{args::Args, errors::InitError};

mod args;
mod config;
mod errors;
mod events;
mod init_db;
mod rpc;

fn main() -> Result<()> {
    let args: Args = from_env();

    // Load config early to initialize logging with config settings
    let config =
        config::get_config(&args).map_err(|e| anyhow!("Failed to load configuration: {e}"))?;

    let rt = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("proofreg-rt")
        .build()
        .map_err(InitError::RuntimeBuild)?;

    init_logging(&config);

    let backend = init_db::init_database(&config.client)
        .map_err(|e| InitError::StorageCreation(e.to_string()))?;
    let registry = Arc::new(ProofRegistry::from_backend(
        backend.as_ref(),
        config.registry.event_channel_capacity,
    ));
    info!(datadir = %config.client.datadir.display(), "opened registry database");

    rt.block_on(run(config, registry))?;

    info!("Exiting proofreg node");
    Ok(())
}

async fn run(config: Config, registry: Arc<ProofRegistry>) -> Result<()> {
    let events = tokio::spawn(events::log_registry_events(registry.subscribe()));

    let rpc_handle = rpc::start_rpc(&config, registry.clone()).await?;

    tokio::select! {
        res = signal::ctrl_c() => {
            if let Err(e) = res {
                error!(%e, "failed to listen for shutdown signal");
            }
            info!("received shutdown signal, stopping RPC server");
            rpc_handle.stop()?;
            rpc_handle.stopped().await;
        }
        _ = rpc_handle.clone().stopped() => {
            error!("RPC server stopped unexpectedly");
        }
    }

    events.abort();

    Ok(())
}

fn init_logging(config: &Config) {
    logging::init_logging_from_config(logging::LoggingInitConfig {
        service_base_name: "proofreg-node",
        service_label: config.logging.service_label.as_deref(),
        log_dir: config.logging.log_dir.as_ref(),
        log_file_prefix: config.logging.log_file_prefix.as_deref(),
        json_format: config.logging.json_format,
        rotation: config.logging.log_rotation.map(file_rotation),
        default_log_prefix: "proofreg",
    });
}

fn file_rotation(rotation: LogRotation) -> logging::Rotation {
    match rotation {
        LogRotation::Minutely => logging::Rotation::MINUTELY,
        LogRotation::Hourly => logging::Rotation::HOURLY,
        LogRotation::Daily => logging::Rotation::DAILY,
        LogRotation::Never => logging::Rotation::NEVER,
    }
}
