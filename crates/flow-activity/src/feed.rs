//! Feed assembly: fetch through an [`ActivitySource`] and render entries.

use crate::format_activity;
use chrono::DateTime;
use flow_types::{Activity, ActivitySource, ActivitySourceError};
use std::fmt;

/// One renderable feed line: who did what, when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: i64,
    pub actor: String,
    pub label: String,
    pub timestamp: String,
}

impl FeedEntry {
    pub fn from_activity(a: &Activity) -> Self {
        Self {
            id: a.id,
            actor: a
                .actor_name
                .clone()
                .unwrap_or_else(|| "Someone".to_string()),
            label: format_activity(a),
            timestamp: display_timestamp(&a.created_at),
        }
    }
}

impl fmt::Display for FeedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} · {}", self.actor, self.label, self.timestamp)
    }
}

/// RFC 3339 timestamps render as "YYYY-MM-DD HH:MM"; anything unparseable
/// renders verbatim.
fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Composes an [`ActivitySource`] with the formatter into renderable feeds.
/// Record order is the source's order (the backend sends newest-first).
pub struct ActivityFeed<S> {
    source: S,
}

impl<S> ActivityFeed<S>
where
    S: ActivitySource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The dashboard's recent-activity feed.
    pub async fn recent(&self) -> Result<Vec<FeedEntry>, ActivitySourceError> {
        Ok(entries(&self.source.recent_activity().await?))
    }

    pub async fn project_feed(
        &self,
        project_id: i64,
    ) -> Result<Vec<FeedEntry>, ActivitySourceError> {
        Ok(entries(&self.source.project_activity(project_id).await?))
    }

    pub async fn issue_feed(&self, issue_id: i64) -> Result<Vec<FeedEntry>, ActivitySourceError> {
        Ok(entries(&self.source.issue_activity(issue_id).await?))
    }
}

fn entries(records: &[Activity]) -> Vec<FeedEntry> {
    records.iter().map(FeedEntry::from_activity).collect()
}
