//! Node configuration.

mod config;

pub use config::{ClientConfig, Config, LogRotation, LoggingConfig, RegistryConfig};
