//! Wire DTOs for the IssueFlow REST backend.

use serde::{Deserialize, Serialize};

/// One backend-emitted activity record surfaced in UI feeds.
///
/// Everything except `id` is optional on the wire: the backend owns the
/// emission logic and newer deployments may drop or rename fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub actor_name: Option<String>,
    /// ISO 8601; used for display ordering only.
    #[serde(default)]
    pub created_at: String,
    /// Per-action auxiliary fields. `Null` when the backend omits it; any
    /// documented key may be absent or hold a non-string value.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub project_key: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body for project create/update.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
}

/// Body for issue creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub project_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: String,
}

/// Body for issue update (full replacement of the editable fields).
#[derive(Debug, Clone, Serialize)]
pub struct IssueUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
}

/// Project member role (wire: "admin" / "member").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

impl MemberRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberRole::Admin => "admin",
            MemberRole::Member => "member",
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
}

/// Dashboard stat counters. Wire keys are camelCase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub open_issues: u32,
    #[serde(default)]
    pub team_members: u32,
    #[serde(default)]
    pub resolved_this_week: u32,
}

/// Dashboard summary payload: counters plus the recent-activity feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default, rename = "recentActivity")]
    pub recent_activity: Vec<Activity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueStatusSlice {
    pub status: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueTimelinePoint {
    pub date: String,
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub resolved: u32,
}

/// Chart series for the dashboard. The backend ships this endpoint but the
/// shape is loosely specified, so every field is defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardCharts {
    #[serde(default, rename = "statusBreakdown")]
    pub status_breakdown: Vec<IssueStatusSlice>,
    #[serde(default)]
    pub timeline: Vec<IssueTimelinePoint>,
}

// Response envelopes, one per endpoint family. The backend wraps each payload
// under a family-specific key.

#[derive(Debug, Deserialize)]
pub struct ActivityResponse {
    #[serde(default)]
    pub activity: Vec<Activity>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectData {
    pub project: Project,
}

#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub data: ProjectData,
}

#[derive(Debug, Deserialize)]
pub struct IssuesResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
pub struct IssueResponse {
    pub issue: Issue,
}

#[derive(Debug, Deserialize)]
pub struct MembersResponse {
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub data: DashboardData,
}

#[derive(Debug, Deserialize)]
pub struct ChartsResponse {
    #[serde(default)]
    pub charts: DashboardCharts,
}

/// Generic acknowledgement for deletes, invites, and role changes.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn activity_tolerates_null_metadata() {
        let a: Activity = serde_json::from_value(json!({
            "id": 1,
            "action": "ISSUE_CREATED",
            "actor_name": "Ana",
            "created_at": "2024-05-01T10:00:00Z",
            "metadata": null
        }))
        .unwrap();
        assert!(a.metadata.is_null());
    }

    #[test]
    fn activity_tolerates_missing_fields() {
        let a: Activity = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(a.action, None);
        assert_eq!(a.actor_name, None);
        assert_eq!(a.created_at, "");
        assert!(a.metadata.is_null());
    }

    #[test]
    fn dashboard_data_reads_camel_case() {
        let d: DashboardData = serde_json::from_value(json!({
            "stats": {
                "projects": 3,
                "openIssues": 5,
                "teamMembers": 4,
                "resolvedThisWeek": 2
            },
            "recentActivity": [{ "id": 1, "action": "PROJECT_CREATED" }]
        }))
        .unwrap();
        assert_eq!(d.stats.open_issues, 5);
        assert_eq!(d.stats.resolved_this_week, 2);
        assert_eq!(d.recent_activity.len(), 1);
    }

    #[test]
    fn member_role_uses_lowercase_wire_form() {
        let m: Member = serde_json::from_value(json!({
            "user_id": 9,
            "name": "Ana",
            "email": "ana@example.com",
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(m.role, MemberRole::Admin);
        assert_eq!(serde_json::to_value(m.role).unwrap(), json!("admin"));
    }

    #[test]
    fn empty_envelopes_default_to_empty_lists() {
        let r: ActivityResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(r.activity.is_empty());
        let c: ChartsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(c.charts.status_breakdown.is_empty());
    }
}
