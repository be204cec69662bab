// strata-core/src/domain/assets/map.rs

use crate::domain::assets::{Bucket, Database, Dataset};
use crate::domain::error::DomainError;
use std::collections::HashMap;

/// The three independent asset collections produced by one load call, each
/// keyed by asset name. Names are unique within a collection, not across
/// collections.
#[derive(Debug, Default)]
pub struct AssetMap {
    pub buckets: HashMap<String, Bucket>,
    pub datasets: HashMap<String, Dataset>,
    pub databases: HashMap<String, Database>,
}

impl AssetMap {
    /// Attach a dataset to a bucket by name.
    ///
    /// Appends the dataset's name to the bucket's ordered list and overwrites
    /// the dataset's back-reference. A dataset previously attached elsewhere
    /// keeps its entry in the old bucket's list (last write wins on the
    /// back-reference only).
    pub fn attach_dataset(
        &mut self,
        bucket_asset_name: &str,
        dataset_asset_name: &str,
    ) -> Result<(), DomainError> {
        if !self.buckets.contains_key(bucket_asset_name) {
            return Err(DomainError::BucketNotFound(bucket_asset_name.to_string()));
        }
        let dataset = self
            .datasets
            .get_mut(dataset_asset_name)
            .ok_or_else(|| DomainError::DatasetNotFound(dataset_asset_name.to_string()))?;
        dataset.set_bucket(bucket_asset_name);
        if let Some(bucket) = self.buckets.get_mut(bucket_asset_name) {
            bucket.push_dataset(dataset_asset_name);
        }
        Ok(())
    }

    /// Storage bucket name of a dataset's owner, or "Unassigned".
    pub fn owning_bucket_name(&self, dataset: &Dataset) -> &str {
        dataset
            .bucket()
            .and_then(|asset| self.buckets.get(asset))
            .map(|b| b.bucket_name.as_str())
            .unwrap_or("Unassigned")
    }
}
