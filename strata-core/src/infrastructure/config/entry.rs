// strata-core/src/infrastructure/config/entry.rs

use crate::domain::assets::{Bucket, Dataset};
use serde::Deserialize;
use serde_yaml::Value;

/// The `asset_type` discriminator selecting which schema applies to a
/// configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Database,
    Bucket,
    #[default]
    BaseDataset,
}

impl AssetType {
    /// Resolve the discriminator value of one entry. An absent key is the
    /// documented backward-compatibility default (`base_dataset`); an
    /// unrecognized value yields `None` and the entry is skipped upstream.
    pub fn from_discriminator(value: Option<&Value>) -> Option<Self> {
        match value {
            None => Some(Self::BaseDataset),
            Some(v) => match v.as_str() {
                Some("database") => Some(Self::Database),
                Some("bucket") => Some(Self::Bucket),
                Some("base_dataset") => Some(Self::BaseDataset),
                _ => None,
            },
        }
    }
}

/// Raw shape of a bucket entry. Inline datasets are full dataset entries
/// carrying their own `asset_name`; assembly moves them into the flat
/// dataset collection and records the ownership on the bucket.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BucketSpec {
    pub asset_name: String,
    pub bucket_name: String,

    #[serde(default)]
    pub access_key: Option<String>,

    #[serde(default)]
    pub secret_key: Option<String>,

    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl BucketSpec {
    pub fn into_parts(self) -> (Bucket, Vec<Dataset>) {
        let bucket = Bucket::new(
            self.asset_name,
            self.bucket_name,
            self.access_key,
            self.secret_key,
        );
        (bucket, self.datasets)
    }
}
