// strata-core/src/domain/assets/dataset.rs

use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// On-storage representation of a dataset's files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Csv,
    Parquet,
    Delta,
    Avro,
    Json,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
            Self::Delta => "delta",
            Self::Avro => "avro",
            Self::Json => "json",
        }
    }
}

impl FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "parquet" => Ok(Self::Parquet),
            "delta" => Ok(Self::Delta),
            "avro" => Ok(Self::Avro),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Invalid file_format '{}' provided, please choose among the list: \
                 [csv, parquet, delta, avro, json]",
                other
            )),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Manual impl so a bad value fails with the full valid list, not serde's
// bare "unknown variant" wording.
impl<'de> Deserialize<'de> for FileFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FileFormat::from_str(&s).map_err(de::Error::custom)
    }
}

/// Where a dataset's files live, derived from its bucket reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    S3,
    Local,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named reference to tabular data, object-storage- or local-path-backed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    pub asset_name: String,
    #[serde(deserialize_with = "non_empty_paths")]
    pub file_path_list: Vec<String>,

    #[serde(default)]
    pub file_format: FileFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_asset_name: Option<String>,

    #[serde(default = "default_header")]
    pub header: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<HashMap<String, String>>,

    // Runtime back-reference to the owning bucket's asset name.
    // Initially the dataset is not in any bucket.
    #[serde(skip)]
    bucket: Option<String>,
}

fn default_header() -> bool {
    true
}

// A dataset with no paths has nothing to point at.
fn non_empty_paths<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let paths = Vec::<String>::deserialize(deserializer)?;
    if paths.is_empty() {
        return Err(de::Error::custom("file_path_list must not be empty"));
    }
    Ok(paths)
}

impl Dataset {
    pub fn location(&self) -> Location {
        if self.bucket_asset_name.is_some() {
            Location::S3
        } else {
            Location::Local
        }
    }

    /// Asset name of the owning bucket, if one has been attached.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Last write wins: attaching to a new bucket overwrites the previous
    /// back-reference without touching the previous bucket's list.
    pub fn set_bucket(&mut self, bucket_asset_name: impl Into<String>) {
        self.bucket = Some(bucket_asset_name.into());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_dataset_defaults() -> Result<()> {
        let yaml = "asset_name: events\nfile_path_list:\n  - data/events/";
        let ds: Dataset = serde_yaml::from_str(yaml)?;
        assert_eq!(ds.file_format, FileFormat::Csv);
        assert!(ds.header);
        assert!(ds.schema.is_none());
        assert_eq!(ds.location(), Location::Local);
        assert!(ds.bucket().is_none());
        Ok(())
    }

    #[test]
    fn test_dataset_with_bucket_reference_is_s3_backed() -> Result<()> {
        let yaml = "\
asset_name: events
file_path_list:
  - raw/events/
bucket_asset_name: lake
file_format: parquet
header: false";
        let ds: Dataset = serde_yaml::from_str(yaml)?;
        assert_eq!(ds.file_format, FileFormat::Parquet);
        assert!(!ds.header);
        assert_eq!(ds.location(), Location::S3);
        Ok(())
    }

    #[test]
    fn test_invalid_file_format_names_value_and_choices() {
        let yaml = "asset_name: x\nfile_path_list: [a]\nfile_format: xml";
        let err = serde_yaml::from_str::<Dataset>(yaml).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid file_format 'xml'"));
        assert!(msg.contains("csv, parquet, delta, avro, json"));
    }

    #[test]
    fn test_empty_file_path_list_is_rejected() {
        let yaml = "asset_name: x\nfile_path_list: []";
        let err = serde_yaml::from_str::<Dataset>(yaml).unwrap_err();
        assert!(err.to_string().contains("file_path_list must not be empty"));
    }

    #[test]
    fn test_missing_file_path_list_is_rejected() {
        let yaml = "asset_name: x";
        let err = serde_yaml::from_str::<Dataset>(yaml).unwrap_err();
        assert!(err.to_string().contains("file_path_list"));
    }

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let yaml = "asset_name: x\nfile_path_list: [a]\ncompression: snappy";
        assert!(serde_yaml::from_str::<Dataset>(yaml).is_err());
    }
}
