// strata-core/src/ports/catalog.rs

use crate::domain::assets::FileFormat;
use async_trait::async_trait;
use thiserror::Error;

// Simple struct describing a catalog column (independent of any SDK)
#[derive(Debug, Clone)]
pub struct CatalogColumn {
    pub name: String,
    pub data_type: String,
}

impl CatalogColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Everything a catalog needs to register one external table.
#[derive(Debug, Clone)]
pub struct CatalogTableSpec {
    pub database_name: String,
    pub table_name: String,
    pub location: String,
    pub columns: Vec<CatalogColumn>,
    pub partition_keys: Vec<CatalogColumn>,
    pub table_format: FileFormat,
}

/// Outcome classification the application layer logs on; anything the
/// adapter cannot classify goes through `Other`.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("table '{0}' already exists")]
    AlreadyExists(String),

    #[error("entity '{0}' not found")]
    NotFound(String),

    #[error("catalog failure: {0}")]
    Other(String),
}

#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn create_table(&self, spec: &CatalogTableSpec) -> Result<(), CatalogError>;

    async fn delete_table(&self, database_name: &str, table_name: &str)
    -> Result<(), CatalogError>;

    async fn start_crawler(&self, crawler_name: &str) -> Result<(), CatalogError>;
}
