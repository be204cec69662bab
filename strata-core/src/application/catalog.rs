// strata-core/src/application/catalog.rs

// Data-catalog use cases. Same runtime tier as operations: outcomes are
// booleans, context goes to the logs. Already-exists and not-found are
// reported as failures but logged at warn, not error.

use crate::ports::catalog::{CatalogClient, CatalogError, CatalogTableSpec};
use tracing::{error, info, warn};

/// Register one external table in the catalog.
pub async fn create_catalog_table(client: &dyn CatalogClient, spec: &CatalogTableSpec) -> bool {
    match client.create_table(spec).await {
        Ok(()) => {
            info!(table = %spec.table_name, database = %spec.database_name, "Catalog table created");
            true
        }
        Err(CatalogError::AlreadyExists(table)) => {
            warn!(table = %table, "Catalog table already exists");
            false
        }
        Err(e) => {
            error!(table = %spec.table_name, "Failed catalog table creation: {}", e);
            false
        }
    }
}

/// Drop one table from the catalog.
pub async fn delete_catalog_table(
    client: &dyn CatalogClient,
    database_name: &str,
    table_name: &str,
) -> bool {
    match client.delete_table(database_name, table_name).await {
        Ok(()) => {
            info!(table = %table_name, database = %database_name, "Catalog table deleted");
            true
        }
        Err(CatalogError::NotFound(entity)) => {
            warn!(entity = %entity, "Catalog table not found");
            false
        }
        Err(e) => {
            error!(table = %table_name, "Failed catalog table deletion: {}", e);
            false
        }
    }
}

/// Kick off an existing catalog crawler.
pub async fn start_crawler(client: &dyn CatalogClient, crawler_name: &str) -> bool {
    match client.start_crawler(crawler_name).await {
        Ok(()) => {
            info!(crawler = %crawler_name, "Crawler started");
            true
        }
        Err(e) => {
            error!(crawler = %crawler_name, "Failed to start crawler: {}", e);
            false
        }
    }
}
