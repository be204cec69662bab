// strata-core/src/application/transfer.rs

use crate::infrastructure::object_url::parse_object_url;
use crate::ports::object_store::ObjectStore;
use tracing::{error, info};

/// Fetch one object's bytes. Absent result means failure; see the logs.
pub async fn read_file(store: &dyn ObjectStore, bucket: &str, key: &str) -> Option<Vec<u8>> {
    match store.read_bytes(bucket, key).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(bucket = %bucket, key = %key, "Failed object read: {}", e);
            None
        }
    }
}

/// Store raw bytes under a bucket and key.
pub async fn write_bytes(
    store: &dyn ObjectStore,
    bucket: &str,
    key: &str,
    bytes: &[u8],
) -> bool {
    match store.write_bytes(bucket, key, bytes).await {
        Ok(()) => {
            info!(bucket = %bucket, key = %key, size = bytes.len(), "Object written");
            true
        }
        Err(e) => {
            error!(bucket = %bucket, key = %key, "Failed object write: {}", e);
            false
        }
    }
}

/// Store raw bytes at an `s3://bucket/key` URL. A malformed URL is a
/// failure before any call is made.
pub async fn write_to_url(store: &dyn ObjectStore, url: &str, bytes: &[u8]) -> bool {
    let Some((bucket, key)) = parse_object_url(url) else {
        error!(url = %url, "Not a valid object-storage URL");
        return false;
    };
    write_bytes(store, &bucket, &key, bytes).await
}
