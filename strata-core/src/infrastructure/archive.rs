// strata-core/src/infrastructure/archive.rs

use crate::infrastructure::error::InfrastructureError;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// Build an uncompressed tar archive in memory, one regular file per
/// mapping pair. The sorted input keeps archive bytes deterministic.
pub fn pack_text_files(
    files: &BTreeMap<String, String>,
) -> Result<Vec<u8>, InfrastructureError> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, content) in files {
        let bytes = content.as_bytes();
        let mut header = tar::Header::new_gnu();
        header.set_size(bytes.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, bytes)
            .map_err(InfrastructureError::Io)?;
    }
    builder.into_inner().map_err(InfrastructureError::Io)
}

/// Read every regular-file entry of a tar archive into filename -> UTF-8
/// content.
pub fn read_text_files(bytes: &[u8]) -> Result<HashMap<String, String>, InfrastructureError> {
    let mut archive = tar::Archive::new(bytes);
    let mut files = HashMap::new();
    for entry in archive.entries().map_err(InfrastructureError::Io)? {
        let mut entry = entry.map_err(InfrastructureError::Io)?;
        if entry.header().entry_type() != tar::EntryType::Regular {
            continue;
        }
        let name = entry
            .path()
            .map_err(InfrastructureError::Io)?
            .to_string_lossy()
            .into_owned();
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|e| InfrastructureError::Archive(format!("entry '{}': {}", name, e)))?;
        files.insert(name, content);
    }
    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_round_trip_preserves_contents() -> Result<()> {
        let mut files = BTreeMap::new();
        files.insert("file1.txt".to_string(), "Hello, world!".to_string());
        files.insert("file2.txt".to_string(), "Rust is awesome.".to_string());
        files.insert("empty.txt".to_string(), String::new());

        let bytes = pack_text_files(&files)?;
        let recovered = read_text_files(&bytes)?;

        assert_eq!(recovered.len(), 3);
        for (name, content) in &files {
            assert_eq!(recovered.get(name), Some(content));
        }
        Ok(())
    }

    #[test]
    fn test_pack_is_deterministic() -> Result<()> {
        let mut files = BTreeMap::new();
        files.insert("b.txt".to_string(), "two".to_string());
        files.insert("a.txt".to_string(), "one".to_string());
        assert_eq!(pack_text_files(&files)?, pack_text_files(&files)?);
        Ok(())
    }

    #[test]
    fn test_garbage_bytes_fail() {
        // A valid tar header is 512 bytes; short garbage cannot parse.
        let garbage = vec![0x42u8; 100];
        assert!(read_text_files(&garbage).is_err());
    }
}
