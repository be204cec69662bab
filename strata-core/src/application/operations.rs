// strata-core/src/application/operations.rs

// Thin operational wrappers over the SqlConnector port. These belong to the
// runtime failure tier: every outcome is a bool plus a log line, never a
// propagated error, so callers must check return values.

use crate::domain::assets::{Database, DatabaseType, FileFormat};
use crate::domain::error::DomainError;
use crate::ports::connector::SqlConnector;
use tracing::{error, info};

/// Knobs for a bulk load. Defaults mirror a headered CSV import.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub separator: String,
    pub header: bool,
    pub replace: bool,
    pub columns: Option<Vec<String>>,
    pub file_format: FileFormat,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            header: true,
            replace: false,
            columns: None,
            file_format: FileFormat::Csv,
        }
    }
}

/// Delete rows from a table, entirely (`delete_all`) or older than a day
/// threshold on a date column. Requiring one of the two forms up front is a
/// caller contract: violations are logged and reported as failure without
/// executing anything.
pub async fn delete_rows(
    database: &Database,
    connector: &dyn SqlConnector,
    schema_name: &str,
    table_name: &str,
    delete_all: bool,
    days: Option<u32>,
    date_column: Option<&str>,
) -> bool {
    let table = qualified(schema_name, table_name);
    let mut statement = format!("DELETE FROM {}", table);
    if delete_all {
        statement.push(';');
    } else if let (Some(days), Some(column)) = (days, date_column) {
        statement.push_str(&format!(
            " WHERE DATE({}) <= CURDATE() - INTERVAL {} DAY;",
            column, days
        ));
    } else {
        error!(
            "{}",
            DomainError::InvalidDeletePredicate {
                table: table.clone()
            }
        );
        return false;
    }
    // Reclaim space after mass deletes on MySQL-backed tables.
    if database.database_type == DatabaseType::Mysql {
        statement.push_str(&format!("\nOPTIMIZE TABLE {};", table));
    }
    match connector.execute(&statement).await {
        Ok(()) => {
            info!(table = %table, "Deleted rows");
            true
        }
        Err(e) => {
            error!(table = %table, "Failed table deletion: {}", e);
            false
        }
    }
}

/// Empty a table outright.
pub async fn truncate_table(
    _database: &Database,
    connector: &dyn SqlConnector,
    schema_name: &str,
    table_name: &str,
) -> bool {
    let table = qualified(schema_name, table_name);
    let statement = format!("TRUNCATE TABLE {};", table);
    match connector.execute(&statement).await {
        Ok(()) => {
            info!(table = %table, "Truncated table");
            true
        }
        Err(e) => {
            error!(table = %table, "Failed table truncation: {}", e);
            false
        }
    }
}

/// Bulk-load object-storage data into a table using the dialect's native
/// load statement.
pub async fn load_into(
    database: &Database,
    connector: &dyn SqlConnector,
    schema_name: &str,
    table_name: &str,
    location: &str,
    options: &LoadOptions,
) -> bool {
    let table = qualified(schema_name, table_name);
    let statement = match database.database_type {
        DatabaseType::Mysql => mysql_load_statement(&table, location, options),
        DatabaseType::Postgresql => postgres_load_statement(&table, location, options),
    };
    match connector.execute(&statement).await {
        Ok(()) => {
            info!(table = %table, location = %location, "Loaded data into table");
            true
        }
        Err(e) => {
            error!(table = %table, location = %location, "Failed loading into table: {}", e);
            false
        }
    }
}

fn qualified(schema_name: &str, table_name: &str) -> String {
    format!("{}.{}", schema_name, table_name)
}

fn mysql_load_statement(table: &str, location: &str, options: &LoadOptions) -> String {
    let mut statement = format!("LOAD DATA FROM S3 PREFIX '{}'", location);
    if options.replace {
        statement.push_str(" REPLACE");
    }
    statement.push_str(&format!(
        " INTO TABLE {} FIELDS TERMINATED BY '{}'",
        table, options.separator
    ));
    if options.header {
        statement.push_str(" IGNORE 1 LINES");
    }
    if let Some(columns) = &options.columns {
        statement.push_str(&format!(" ({})", columns.join(", ")));
    }
    statement.push(';');
    statement
}

fn postgres_load_statement(table: &str, location: &str, options: &LoadOptions) -> String {
    let mut with_clause = format!(
        "FORMAT {}, DELIMITER '{}'",
        options.file_format.as_str().to_uppercase(),
        options.separator
    );
    if options.header {
        with_clause.push_str(", HEADER");
    }
    format!("COPY {} FROM '{}' WITH ({});", table, location, with_clause)
}
