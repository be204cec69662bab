// strata-core/src/ports/connector.rs

// What the application needs from a relational database, without knowing
// which driver provides it. The adapter owns connection scoping: each call
// executes one statement and commits before returning.

use crate::error::StrataError;
use async_trait::async_trait;

#[async_trait]
pub trait SqlConnector: Send + Sync {
    /// Execute one SQL statement and commit.
    async fn execute(&self, statement: &str) -> Result<(), StrataError>;
}
