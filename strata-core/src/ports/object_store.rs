// strata-core/src/ports/object_store.rs

use crate::error::StrataError;
use async_trait::async_trait;

/// Raw byte access to an object store. Credentials and session handling
/// live in the adapter.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn read_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StrataError>;

    async fn write_bytes(&self, bucket: &str, key: &str, bytes: &[u8])
    -> Result<(), StrataError>;
}
