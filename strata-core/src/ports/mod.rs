// strata-core/src/ports/mod.rs

pub mod catalog;
pub mod connector;
pub mod object_store;
pub mod source_control;

pub use catalog::{CatalogClient, CatalogColumn, CatalogError, CatalogTableSpec};
pub use connector::SqlConnector;
pub use object_store::ObjectStore;
pub use source_control::{CommitId, RemoteFile, SourceControl, SourceLocation};
