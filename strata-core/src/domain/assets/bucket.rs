// strata-core/src/domain/assets/bucket.rs

use serde::Serialize;

/// An object-storage bucket. Absent keys mean ambient credentials.
///
/// Ownership of datasets is index-based: the bucket holds the asset names of
/// the datasets it owns, and each owned dataset carries the bucket's asset
/// name as a back-reference. The objects themselves live in the flat
/// collections of [`super::AssetMap`].
#[derive(Debug, Clone, Serialize)]
pub struct Bucket {
    pub asset_name: String,
    pub bucket_name: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    datasets: Vec<String>,
}

impl Bucket {
    pub fn new(
        asset_name: impl Into<String>,
        bucket_name: impl Into<String>,
        access_key: Option<String>,
        secret_key: Option<String>,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            bucket_name: bucket_name.into(),
            access_key,
            secret_key,
            datasets: Vec::new(),
        }
    }

    /// Ordered asset names of the datasets owned by this bucket.
    pub fn dataset_names(&self) -> &[String] {
        &self.datasets
    }

    pub(crate) fn push_dataset(&mut self, dataset_asset_name: impl Into<String>) {
        self.datasets.push(dataset_asset_name.into());
    }
}
