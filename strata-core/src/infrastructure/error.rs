// strata-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(strata::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(strata::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Asset configuration not found at '{0}'")]
    #[diagnostic(code(strata::infra::config_missing))]
    ConfigNotFound(String),

    // --- ARCHIVES ---
    #[error("Archive Error: {0}")]
    #[diagnostic(
        code(strata::infra::archive),
        help("The tar payload is malformed or not UTF-8 text.")
    )]
    Archive(String),
}
