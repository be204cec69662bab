// strata-core/tests/asset_loading.rs
//
// End-to-end: real config files on disk, real process environment.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use strata_core::domain::assets::{DatabaseType, FileFormat, Location};
use strata_core::error::StrataError;
use strata_core::load_assets;
use tempfile::TempDir;

struct ConfigFixture {
    _tmp: TempDir,
    paths: Vec<PathBuf>,
}

impl ConfigFixture {
    fn new(documents: &[&str]) -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let mut paths = Vec::new();
        for (i, document) in documents.iter().enumerate() {
            let path = tmp.path().join(format!("config{}.yaml", i + 1));
            fs::write(&path, document)?;
            paths.push(path);
        }
        Ok(Self { _tmp: tmp, paths })
    }
}

fn set_env(vars: &[(&str, &str)]) {
    for (key, value) in vars {
        // SAFETY: test-local variables, set before any load call reads them.
        unsafe { std::env::set_var(key, value) };
    }
}

#[test]
fn test_load_assets_end_to_end() -> Result<()> {
    set_env(&[
        ("STRATA_TEST_DB1_HOST", "localhost1"),
        ("STRATA_TEST_DB1_PORT", "5431"),
        ("STRATA_TEST_DB2_HOST", "localhost2"),
        ("STRATA_TEST_DB2_PORT", "5432"),
    ]);

    let fixture = ConfigFixture::new(&[
        "\
db1:
  asset_type: database
  database_type: postgresql
  host: '{{STRATA_TEST_DB1_HOST}}'
  port: '{{STRATA_TEST_DB1_PORT}}'
  user: user1
  password: password1
db2:
  asset_type: database
  database_type: mysql
  host: placeholder
  port: '1'
  user: user2
  password: password2
lake:
  asset_type: bucket
  bucket_name: company-lake
  datasets:
    - asset_name: events
      file_path_list: [raw/events/]
      bucket_asset_name: lake
      file_format: parquet
",
        "\
db2:
  asset_type: database
  database_type: mysql
  host: '{{STRATA_TEST_DB2_HOST}}'
  port: '{{STRATA_TEST_DB2_PORT}}'
  user: user2
  password: password2
sessions:
  file_path_list: [data/sessions/]
",
    ])?;

    let map = load_assets(&fixture.paths)?;

    // Environment variables are applied and ports are integers.
    assert_eq!(map.databases["db1"].host, "localhost1");
    assert_eq!(map.databases["db1"].port, 5431);
    assert_eq!(map.databases["db1"].database_type, DatabaseType::Postgresql);

    // The second file's definition of db2 wins entirely.
    assert_eq!(map.databases["db2"].host, "localhost2");
    assert_eq!(map.databases["db2"].port, 5432);

    // Inline bucket datasets land in the flat dataset collection, attached.
    assert_eq!(map.buckets["lake"].dataset_names(), ["events"]);
    let events = &map.datasets["events"];
    assert_eq!(events.file_format, FileFormat::Parquet);
    assert_eq!(events.location(), Location::S3);
    assert_eq!(map.owning_bucket_name(events), "company-lake");

    // An entry with no asset_type is a base dataset.
    let sessions = &map.datasets["sessions"];
    assert_eq!(sessions.file_format, FileFormat::Csv);
    assert!(sessions.header);
    assert_eq!(sessions.location(), Location::Local);

    Ok(())
}

#[test]
fn test_unset_variable_and_bad_port_are_lenient() -> Result<()> {
    let fixture = ConfigFixture::new(&["\
db_lenient:
  asset_type: database
  database_type: mysql
  host: '{{STRATA_TEST_NEVER_SET_ANYWHERE}}'
  port: not-a-number
  user: u
  password: p
"])?;

    let map = load_assets(&fixture.paths)?;
    assert_eq!(map.databases["db_lenient"].host, "");
    assert_eq!(map.databases["db_lenient"].port, 0);
    Ok(())
}

#[test]
fn test_validation_failure_returns_no_partial_map() -> Result<()> {
    let fixture = ConfigFixture::new(&["\
good:
  file_path_list: [data/]
bad:
  file_path_list: [data/]
  file_format: xml
"])?;

    let err = load_assets(&fixture.paths).unwrap_err();
    assert!(matches!(err, StrataError::Domain(_)));
    assert!(err.to_string().contains("bad"));
    assert!(err.to_string().contains("Invalid file_format 'xml'"));
    Ok(())
}

#[test]
fn test_missing_config_file_aborts() {
    let missing = [PathBuf::from("/definitely/not/here.yaml")];
    let err = load_assets(&missing).unwrap_err();
    assert!(matches!(err, StrataError::Infrastructure(_)));
}
