//! Mock activity source for tests: preloaded records, no network.

use async_trait::async_trait;
use flow_types::{Activity, ActivitySource, ActivitySourceError};
use std::collections::HashMap;

/// In-memory [`ActivitySource`] returning preloaded records. Unknown project
/// or issue ids yield empty feeds, matching a backend with no history.
#[derive(Default)]
pub struct MockActivitySource {
    recent: Vec<Activity>,
    by_project: HashMap<i64, Vec<Activity>>,
    by_issue: HashMap<i64, Vec<Activity>>,
}

impl MockActivitySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recent(mut self, records: Vec<Activity>) -> Self {
        self.recent = records;
        self
    }

    pub fn with_project(mut self, project_id: i64, records: Vec<Activity>) -> Self {
        self.by_project.insert(project_id, records);
        self
    }

    pub fn with_issue(mut self, issue_id: i64, records: Vec<Activity>) -> Self {
        self.by_issue.insert(issue_id, records);
        self
    }
}

#[async_trait]
impl ActivitySource for MockActivitySource {
    async fn recent_activity(&self) -> Result<Vec<Activity>, ActivitySourceError> {
        Ok(self.recent.clone())
    }

    async fn project_activity(
        &self,
        project_id: i64,
    ) -> Result<Vec<Activity>, ActivitySourceError> {
        Ok(self.by_project.get(&project_id).cloned().unwrap_or_default())
    }

    async fn issue_activity(&self, issue_id: i64) -> Result<Vec<Activity>, ActivitySourceError> {
        Ok(self.by_issue.get(&issue_id).cloned().unwrap_or_default())
    }
}
