// strata-core/src/ports/source_control.rs

use crate::error::StrataError;
use async_trait::async_trait;

/// Coordinates of one file in one branch of one repository.
#[derive(Debug, Clone)]
pub struct SourceLocation {
    pub repo_name: String,
    pub branch: String,
    pub path: String,
}

/// A file as currently stored remotely. The sha identifies the revision the
/// next update must be based on.
#[derive(Debug, Clone)]
pub struct RemoteFile {
    pub path: String,
    pub sha: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitId(pub String);

#[async_trait]
pub trait SourceControl: Send + Sync {
    async fn get_file(&self, location: &SourceLocation) -> Result<RemoteFile, StrataError>;

    async fn update_file(
        &self,
        location: &SourceLocation,
        message: &str,
        content: &str,
        base_sha: &str,
    ) -> Result<CommitId, StrataError>;
}
