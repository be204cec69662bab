// strata-core/src/application/loading.rs

use crate::domain::assets::{AssetMap, Database, Dataset};
use crate::domain::error::DomainError;
use crate::error::StrataError;
use crate::infrastructure::config::entry::{AssetType, BucketSpec};
use crate::infrastructure::config::env::{self, ASSET_TYPE_KEY};
use crate::infrastructure::config::loader::merge_config_files;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Load a set of assets from an ordered list of YAML configuration paths.
///
/// The pipeline: merge the files shallowly (later keys win), resolve
/// `{{VAR}}` placeholders against the process environment, coerce and
/// validate each entry per its `asset_type`, and assemble the typed asset
/// collections. Validation failures abort the whole load; no partial map
/// is returned.
#[instrument(skip_all, fields(files = paths.len()))]
pub fn load_assets<P: AsRef<Path>>(paths: &[P]) -> Result<AssetMap, StrataError> {
    let merged = merge_config_files(paths)?;
    let map = build_asset_map(&merged, &|name| std::env::var(name).ok())?;
    info!(
        buckets = map.buckets.len(),
        datasets = map.datasets.len(),
        databases = map.databases.len(),
        "Assets loaded"
    );
    Ok(map)
}

/// Assemble the asset map from an already-merged configuration mapping,
/// with an injected environment lookup.
pub(crate) fn build_asset_map(
    merged: &Mapping,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<AssetMap, StrataError> {
    let mut map = AssetMap::default();
    for (key, value) in merged {
        let asset_name = key.as_str().ok_or_else(|| DomainError::Validation {
            asset: format!("{:?}", key),
            message: "asset name must be a string".to_string(),
        })?;
        let attributes = value.as_mapping().ok_or_else(|| DomainError::Validation {
            asset: asset_name.to_string(),
            message: "entry must be a mapping of attributes".to_string(),
        })?;

        let asset_type = match AssetType::from_discriminator(attributes.get(ASSET_TYPE_KEY)) {
            Some(t) => t,
            None => {
                warn!(asset = asset_name, "Unrecognized asset_type, skipping entry");
                continue;
            }
        };

        let mut resolved = env::resolve_entry(attributes, lookup);
        resolved.remove(ASSET_TYPE_KEY);
        // The top-level key is the authoritative asset name.
        resolved.insert(Value::from("asset_name"), Value::from(asset_name));

        match asset_type {
            AssetType::Database => {
                let database: Database = deserialize_entry(asset_name, resolved)?;
                map.databases.insert(asset_name.to_string(), database);
            }
            AssetType::BaseDataset => {
                let dataset: Dataset = deserialize_entry(asset_name, resolved)?;
                map.datasets.insert(asset_name.to_string(), dataset);
            }
            AssetType::Bucket => {
                let spec: BucketSpec = deserialize_entry(asset_name, resolved)?;
                let (bucket, inline_datasets) = spec.into_parts();
                map.buckets.insert(asset_name.to_string(), bucket);
                for dataset in inline_datasets {
                    let dataset_name = dataset.asset_name.clone();
                    map.datasets.insert(dataset_name.clone(), dataset);
                    map.attach_dataset(asset_name, &dataset_name)?;
                }
            }
        }
    }
    Ok(map)
}

fn deserialize_entry<T: DeserializeOwned>(
    asset_name: &str,
    attributes: Mapping,
) -> Result<T, StrataError> {
    serde_yaml::from_value(Value::Mapping(attributes)).map_err(|e| {
        StrataError::Domain(DomainError::Validation {
            asset: asset_name.to_string(),
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::assets::{DatabaseType, FileFormat, Location};
    use anyhow::Result;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "DB1_HOST" => Some("localhost1".to_string()),
            _ => None,
        }
    }

    fn build(yaml: &str) -> Result<AssetMap, StrataError> {
        let merged: Mapping = serde_yaml::from_str(yaml).unwrap();
        build_asset_map(&merged, &lookup)
    }

    #[test]
    fn test_database_entry_with_placeholders() -> Result<()> {
        let map = build(
            "\
db1:
  asset_type: database
  host: '{{DB1_HOST}}'
  port: '5431'
  user: u
  password: p
  database_type: postgresql",
        )?;
        let db = &map.databases["db1"];
        assert_eq!(db.host, "localhost1");
        assert_eq!(db.port, 5431);
        assert_eq!(db.database_type, DatabaseType::Postgresql);
        Ok(())
    }

    #[test]
    fn test_entry_without_asset_type_is_a_dataset() -> Result<()> {
        let map = build("events:\n  file_path_list: [data/events/]")?;
        let ds = &map.datasets["events"];
        assert_eq!(ds.asset_name, "events");
        assert_eq!(ds.file_format, FileFormat::Csv);
        assert_eq!(ds.location(), Location::Local);
        Ok(())
    }

    #[test]
    fn test_unknown_asset_type_is_skipped() -> Result<()> {
        let map = build(
            "\
weird:
  asset_type: warehouse
  host: h
events:
  file_path_list: [data/]",
        )?;
        assert!(map.databases.is_empty() && map.buckets.is_empty());
        assert_eq!(map.datasets.len(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_enum_aborts_load_naming_the_asset() {
        let err = build(
            "\
db1:
  asset_type: database
  host: h
  port: 1
  user: u
  password: p
  database_type: oracle",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("db1"));
        assert!(msg.contains("Invalid database_type 'oracle'"));
    }

    #[test]
    fn test_missing_required_field_aborts_load() {
        let err = build(
            "\
db1:
  asset_type: database
  host: h
  user: u
  password: p",
        )
        .unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_bucket_with_inline_datasets_is_attached() -> Result<()> {
        let map = build(
            "\
lake:
  asset_type: bucket
  bucket_name: company-lake
  datasets:
    - asset_name: events
      file_path_list: [raw/events/]
      bucket_asset_name: lake",
        )?;
        assert_eq!(map.buckets["lake"].dataset_names(), ["events"]);
        let ds = &map.datasets["events"];
        assert_eq!(ds.bucket(), Some("lake"));
        assert_eq!(ds.location(), Location::S3);
        assert_eq!(map.owning_bucket_name(ds), "company-lake");
        Ok(())
    }

    #[test]
    fn test_schema_column_named_port_loads_as_string() -> Result<()> {
        // Port coercion applies to the entry's own attributes only; a
        // schema column that happens to be called "port" keeps its type.
        let map = build(
            "\
conn_log:
  file_path_list: [data/conn/]
  schema:
    host: string
    port: int",
        )?;
        let schema = map.datasets["conn_log"].schema.as_ref().unwrap();
        assert_eq!(schema["port"], "int");
        assert_eq!(schema["host"], "string");
        Ok(())
    }

    #[test]
    fn test_top_level_bucket_reference_is_not_resolved() -> Result<()> {
        // bucket_asset_name linkage is a caller-driven extension point.
        let map = build(
            "\
lake:
  asset_type: bucket
  bucket_name: company-lake
events:
  file_path_list: [raw/events/]
  bucket_asset_name: lake",
        )?;
        assert!(map.buckets["lake"].dataset_names().is_empty());
        assert!(map.datasets["events"].bucket().is_none());
        Ok(())
    }

    #[test]
    fn test_unset_environment_variable_becomes_empty_string() -> Result<()> {
        let map = build(
            "\
db1:
  asset_type: database
  host: '{{NOT_SET_ANYWHERE}}'
  port: 1
  user: u
  password: '{{ALSO_NOT_SET}}'
  database_type: mysql",
        )?;
        assert_eq!(map.databases["db1"].host, "");
        assert_eq!(map.databases["db1"].password, "");
        Ok(())
    }

    #[test]
    fn test_names_are_independent_across_collections() -> Result<()> {
        // An inline dataset may reuse its bucket's asset name: the two live
        // in separate collections.
        let map = build(
            "\
shared:
  asset_type: bucket
  bucket_name: b
  datasets:
    - asset_name: shared
      file_path_list: [x]",
        )?;
        assert!(map.buckets.contains_key("shared"));
        assert!(map.datasets.contains_key("shared"));
        assert_eq!(map.datasets["shared"].bucket(), Some("shared"));
        Ok(())
    }
}
