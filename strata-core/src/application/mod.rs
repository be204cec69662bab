// strata-core/src/application/mod.rs

pub mod catalog;
pub mod loading;
pub mod operations;
pub mod source_update;
pub mod transfer;
