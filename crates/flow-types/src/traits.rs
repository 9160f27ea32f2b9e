//! Trait seam between activity consumers and whatever fetches the records.

use crate::Activity;
use async_trait::async_trait;

/// Supplier of activity record sequences (ordered newest-first by the
/// backend, no duplicate ids within one fetch).
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// The dashboard's recent-activity feed.
    async fn recent_activity(&self) -> Result<Vec<Activity>, ActivitySourceError>;

    /// Activity of one project.
    async fn project_activity(&self, project_id: i64)
        -> Result<Vec<Activity>, ActivitySourceError>;

    /// Activity of one issue.
    async fn issue_activity(&self, issue_id: i64) -> Result<Vec<Activity>, ActivitySourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ActivitySourceError {
    #[error("activity source error: {0}")]
    Other(String),
}
