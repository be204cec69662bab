// strata-core/src/infrastructure/mod.rs

pub mod archive;
pub mod config;
pub mod error;
pub mod object_url;

pub use config::entry::{AssetType, BucketSpec};
pub use config::loader::merge_config_files;
