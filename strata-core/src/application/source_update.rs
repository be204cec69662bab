// strata-core/src/application/source_update.rs

use crate::ports::source_control::{CommitId, SourceControl, SourceLocation};
use tracing::{error, info};

pub const UPDATE_COMMIT_MESSAGE: &str = "Automated code update.";

/// Replace one repository file with new content: fetch the current revision
/// for its sha, then push the update against it. Returns the new commit id,
/// or None with the failure logged.
pub async fn update_source(
    client: &dyn SourceControl,
    location: &SourceLocation,
    source_code: &str,
) -> Option<CommitId> {
    let remote = match client.get_file(location).await {
        Ok(remote) => remote,
        Err(e) => {
            error!(path = %location.path, repo = %location.repo_name, "Failed fetching source file: {}", e);
            return None;
        }
    };
    match client
        .update_file(location, UPDATE_COMMIT_MESSAGE, source_code, &remote.sha)
        .await
    {
        Ok(commit) => {
            info!(path = %location.path, repo = %location.repo_name, commit = %commit.0, "Source updated");
            Some(commit)
        }
        Err(e) => {
            error!(path = %location.path, repo = %location.repo_name, "Failed updating source: {}", e);
            None
        }
    }
}
