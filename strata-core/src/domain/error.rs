// strata-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Validation failed for asset '{asset}': {message}")]
    #[diagnostic(
        code(strata::domain::validation),
        help("Check the asset's attributes against its declared asset_type.")
    )]
    Validation { asset: String, message: String },

    #[error("Delete on '{table}' needs delete_all or both days and date_column")]
    #[diagnostic(code(strata::domain::delete_predicate))]
    InvalidDeletePredicate { table: String },

    #[error("Bucket '{0}' not found in the asset map")]
    #[diagnostic(code(strata::domain::bucket_not_found))]
    BucketNotFound(String),

    #[error("Dataset '{0}' not found in the asset map")]
    #[diagnostic(code(strata::domain::dataset_not_found))]
    DatasetNotFound(String),
}
