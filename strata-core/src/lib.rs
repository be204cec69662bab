// strata-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for external collaborators (SQL, object store, catalog, SCM).
pub mod ports;

// 2. Domain (Business core)
// Asset model, closed enumerations, MAC redaction.
// Depends on nothing else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// YAML loading, placeholder resolution, archives, URL parsing.
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (asset loading, database/catalog/source operations).
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::loading::load_assets;
pub use domain::assets::{AssetMap, Bucket, Database, DatabaseType, Dataset, FileFormat};
pub use error::StrataError;
