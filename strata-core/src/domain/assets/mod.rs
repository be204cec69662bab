// strata-core/src/domain/assets/mod.rs

pub mod bucket;
pub mod database;
pub mod dataset;
pub mod map;

pub use bucket::Bucket;
pub use database::{Database, DatabaseType};
pub use dataset::{Dataset, FileFormat, Location};
pub use map::AssetMap;
