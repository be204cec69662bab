// strata-core/src/infrastructure/config/mod.rs

pub mod entry;
pub mod env;
pub mod loader;
