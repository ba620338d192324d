//! Sled store for the proof registry.

mod config;
pub mod coverage;
mod init;
mod lexicographic;
pub mod macros;
pub mod product;
mod serialization_types;
mod utils;

use std::{path::Path, sync::Arc};

use proofreg_db_types::{
    traits::{CoverageDatabase, DatabaseBackend, ProductDatabase},
    DbResult,
};
use typed_sled::SledDb;

pub use crate::{
    config::SledDbConfig,
    coverage::db::CoverageDBSled,
    init::{init_core_dbs, open_sled_database},
    product::db::ProductDBSled,
};

pub const SLED_NAME: &str = "proofreg";

/// Opens a complete Sled backend from datadir with all database types
pub fn open_sled_backend(
    datadir: &Path,
    dbname: &'static str,
    ops_config: SledDbConfig,
) -> anyhow::Result<Arc<SledBackend>> {
    let sled_db = open_sled_database(datadir, dbname)?;
    SledBackend::new(sled_db, ops_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize sled backend: {}", e))
        .map(Arc::new)
}

/// Complete Sled backend with all database types
#[derive(Debug)]
pub struct SledBackend {
    product_db: Arc<ProductDBSled>,
    coverage_db: Arc<CoverageDBSled>,
}

impl SledBackend {
    pub fn new(sled_db: Arc<SledDb>, config: SledDbConfig) -> DbResult<Self> {
        let product_db = Arc::new(ProductDBSled::new(sled_db.clone(), config.clone())?);
        let coverage_db = Arc::new(CoverageDBSled::new(sled_db, config)?);
        Ok(Self {
            product_db,
            coverage_db,
        })
    }
}

impl DatabaseBackend for SledBackend {
    fn product_db(&self) -> Arc<impl ProductDatabase> {
        self.product_db.clone()
    }

    fn coverage_db(&self) -> Arc<impl CoverageDatabase> {
        self.coverage_db.clone()
    }
}
