use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default value for `rpc_host` in [`ClientConfig`].
const DEFAULT_RPC_HOST: &str = "127.0.0.1";

/// Default value for `rpc_port` in [`ClientConfig`].
const DEFAULT_RPC_PORT: u16 = 8545;

/// Default value for `datadir` in [`ClientConfig`].
const DEFAULT_DATADIR: &str = "proofreg-data";

/// Default DB retry count.
const DEFAULT_DB_RETRY_COUNT: u16 = 3;

/// Default DB retry delay in ms.
const DEFAULT_DB_RETRY_DELAY: u64 = 200;

/// Default capacity of the registry event channel.
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Default cap on entries returned by a single coverage range request.
const DEFAULT_MAX_COVERAGE_PAGE: u64 = 256;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Addr that the client rpc will listen to.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port that the client rpc will listen to.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// The data directory where database contents reside.
    #[serde(default = "default_datadir")]
    pub datadir: PathBuf,

    /// For optimistic transactions, how many times to retry if a write fails.
    #[serde(default = "default_db_retry_count")]
    pub db_retry_count: u16,

    /// Db retry delay in ms.
    #[serde(default = "default_db_retry_delay")]
    pub db_retry_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            datadir: default_datadir(),
            db_retry_count: default_db_retry_count(),
            db_retry_delay_ms: default_db_retry_delay(),
        }
    }
}

fn default_rpc_host() -> String {
    DEFAULT_RPC_HOST.to_owned()
}

fn default_rpc_port() -> u16 {
    DEFAULT_RPC_PORT
}

fn default_datadir() -> PathBuf {
    DEFAULT_DATADIR.into()
}

fn default_db_retry_count() -> u16 {
    DEFAULT_DB_RETRY_COUNT
}

fn default_db_retry_delay() -> u64 {
    DEFAULT_DB_RETRY_DELAY
}

fn default_event_channel_capacity() -> usize {
    DEFAULT_EVENT_CHANNEL_CAPACITY
}

fn default_max_coverage_page() -> u64 {
    DEFAULT_MAX_COVERAGE_PAGE
}

/// Registry behaviour knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// How many undelivered events a slow subscriber may fall behind by.
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,

    /// Upper bound on `limit` for coverage range requests.
    #[serde(default = "default_max_coverage_page")]
    pub max_coverage_page: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            event_channel_capacity: default_event_channel_capacity(),
            max_coverage_page: default_max_coverage_page(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Service label to append to the service name (e.g., "prod", "dev").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_label: Option<String>,

    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,

    /// How often file logs roll over to a new file. Daily when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_rotation: Option<LogRotation>,
}

/// Rollover period for file logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    Daily,
    Never,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}
