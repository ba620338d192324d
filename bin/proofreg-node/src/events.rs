//! Logs registry events as they are published.

use proofreg_registry::RegistryEvent;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

/// Consumes registry events until the channel closes.
pub(crate) async fn log_registry_events(mut rx: broadcast::Receiver<RegistryEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => log_event(&event),
            Err(RecvError::Lagged(n)) => {
                warn!(target: "proofreg::events", lagged = n, "event logger fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

fn log_event(event: &RegistryEvent) {
    match event {
        RegistryEvent::ProductRegistered {
            product_id,
            owner,
            metadata_uri,
        } => {
            info!(target: "proofreg::events", %product_id, %owner, %metadata_uri, "ProductRegistered");
        }
        RegistryEvent::CoverageAdded {
            product_id,
            coverage_index,
            reporter,
            proof_hash,
            proof_uri,
        } => {
            info!(
                target: "proofreg::events",
                %product_id,
                %coverage_index,
                %reporter,
                %proof_hash,
                %proof_uri,
                "CoverageAdded"
            );
        }
        RegistryEvent::ProductMetadataUpdated {
            product_id,
            metadata_uri,
        } => {
            info!(target: "proofreg::events", %product_id, %metadata_uri, "ProductMetadataUpdated");
        }
    }
}
