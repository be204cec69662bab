// strata-core/src/infrastructure/config/loader.rs

use crate::infrastructure::error::InfrastructureError;
use serde_yaml::Mapping;
use std::fs;
use std::path::Path;

/// Read each path as a YAML mapping of asset name -> attribute mapping and
/// merge shallowly. Later paths overwrite earlier ones per top-level key;
/// the merged mapping keeps the insertion order of first appearance. Any
/// missing or unparsable file aborts the whole merge.
pub fn merge_config_files<P: AsRef<Path>>(paths: &[P]) -> Result<Mapping, InfrastructureError> {
    let mut merged = Mapping::new();
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InfrastructureError::ConfigNotFound(
                path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
        let document: Mapping =
            serde_yaml::from_str(&content).map_err(InfrastructureError::Yaml)?;
        for (key, value) in document {
            merged.insert(key, value);
        }
    }
    Ok(merged)
}
