//! Client struct and one method per backend endpoint.

use async_trait::async_trait;
use flow_types::{
    Ack, Activity, ActivityResponse, ActivitySource, ActivitySourceError, ChartsResponse,
    DashboardCharts, DashboardData, DashboardResponse, Issue, IssueResponse, IssueUpdate,
    IssuesResponse, Member, MemberRole, MembersResponse, NewIssue, Project, ProjectPayload,
    ProjectResponse, ProjectsResponse,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend error {status}: {message}")]
    Backend { status: u16, message: String },
}

/// Async client for the IssueFlow backend. Attaches the bearer token to every
/// request when one is configured.
#[derive(Clone)]
pub struct IssueFlowClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl IssueFlowClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Reads `ISSUEFLOW_API_URL` (default `http://localhost:3000/api`) and
    /// `ISSUEFLOW_TOKEN`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ISSUEFLOW_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = std::env::var("ISSUEFLOW_TOKEN").ok();
        Self::new(base_url, token)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            tracing::debug!(status = %status, "backend rejected request");
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(method, path).json(body)).await
    }

    // ---- projects ----

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let res: ProjectsResponse = self.get_json("/projects").await?;
        Ok(res.projects)
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<Ack, ApiError> {
        self.send_json(Method::POST, "/projects", payload).await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        let res: ProjectResponse = self.get_json(&format!("/projects/{}", id)).await?;
        Ok(res.data.project)
    }

    pub async fn update_project(&self, id: i64, payload: &ProjectPayload) -> Result<Ack, ApiError> {
        self.send_json(Method::PUT, &format!("/projects/{}", id), payload)
            .await
    }

    pub async fn delete_project(&self, id: i64) -> Result<Ack, ApiError> {
        self.execute(self.request(Method::DELETE, &format!("/projects/{}", id)))
            .await
    }

    // ---- issues ----

    pub async fn list_issues(&self) -> Result<Vec<Issue>, ApiError> {
        let res: IssuesResponse = self.get_json("/issues").await?;
        Ok(res.issues)
    }

    /// Issues of one project.
    pub async fn project_issues(&self, project_id: i64) -> Result<Vec<Issue>, ApiError> {
        let res: IssuesResponse = self
            .get_json(&format!("/projects/{}/issues", project_id))
            .await?;
        Ok(res.issues)
    }

    pub async fn create_issue(&self, payload: &NewIssue) -> Result<Issue, ApiError> {
        let res: IssueResponse = self.send_json(Method::POST, "/issues", payload).await?;
        Ok(res.issue)
    }

    pub async fn get_issue(&self, id: i64) -> Result<Issue, ApiError> {
        let res: IssueResponse = self.get_json(&format!("/issues/{}", id)).await?;
        Ok(res.issue)
    }

    pub async fn update_issue(&self, id: i64, payload: &IssueUpdate) -> Result<Issue, ApiError> {
        let res: IssueResponse = self
            .send_json(Method::PUT, &format!("/issues/{}", id), payload)
            .await?;
        Ok(res.issue)
    }

    pub async fn delete_issue(&self, id: i64) -> Result<Ack, ApiError> {
        self.execute(self.request(Method::DELETE, &format!("/issues/{}", id)))
            .await
    }

    // ---- members & invites ----

    pub async fn project_members(&self, project_id: i64) -> Result<Vec<Member>, ApiError> {
        let res: MembersResponse = self
            .get_json(&format!("/projects/{}/members", project_id))
            .await?;
        Ok(res.members)
    }

    /// Invite a user to a project by email.
    pub async fn invite_member(
        &self,
        project_id: i64,
        email: &str,
        role: MemberRole,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/invites/projects/{}/invite", project_id),
            &json!({ "email": email, "role": role }),
        )
        .await
    }

    pub async fn update_member_role(
        &self,
        project_id: i64,
        user_id: i64,
        role: MemberRole,
    ) -> Result<Ack, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/projects/{}/members/{}/role", project_id, user_id),
            &json!({ "role": role }),
        )
        .await
    }

    pub async fn remove_member(&self, project_id: i64, user_id: i64) -> Result<Ack, ApiError> {
        self.execute(self.request(
            Method::DELETE,
            &format!("/projects/{}/members/{}", project_id, user_id),
        ))
        .await
    }

    /// Redeem an invite token for the authenticated user.
    pub async fn accept_invite(&self, invite_token: &str) -> Result<Ack, ApiError> {
        self.send_json(
            Method::POST,
            "/invites/accept",
            &json!({ "token": invite_token }),
        )
        .await
    }

    // ---- dashboard & activity ----

    /// Stat counters plus the recent-activity feed.
    pub async fn dashboard_summary(&self) -> Result<DashboardData, ApiError> {
        let res: DashboardResponse = self.get_json("/dashboard").await?;
        Ok(res.data)
    }

    pub async fn dashboard_charts(&self) -> Result<DashboardCharts, ApiError> {
        let res: ChartsResponse = self.get_json("/dashboard/charts").await?;
        Ok(res.charts)
    }

    pub async fn fetch_project_activity(&self, project_id: i64) -> Result<Vec<Activity>, ApiError> {
        let res: ActivityResponse = self
            .get_json(&format!("/activity/projects/{}/activity", project_id))
            .await?;
        Ok(res.activity)
    }

    pub async fn fetch_issue_activity(&self, issue_id: i64) -> Result<Vec<Activity>, ApiError> {
        let res: ActivityResponse = self
            .get_json(&format!("/activity/issues/{}/activity", issue_id))
            .await?;
        Ok(res.activity)
    }
}

#[async_trait]
impl ActivitySource for IssueFlowClient {
    async fn recent_activity(&self) -> Result<Vec<Activity>, ActivitySourceError> {
        let data = self.dashboard_summary().await.map_err(source_err)?;
        Ok(data.recent_activity)
    }

    async fn project_activity(
        &self,
        project_id: i64,
    ) -> Result<Vec<Activity>, ActivitySourceError> {
        self.fetch_project_activity(project_id)
            .await
            .map_err(source_err)
    }

    async fn issue_activity(&self, issue_id: i64) -> Result<Vec<Activity>, ActivitySourceError> {
        self.fetch_issue_activity(issue_id).await.map_err(source_err)
    }
}

fn source_err(e: ApiError) -> ActivitySourceError {
    ActivitySourceError::Other(e.to_string())
}

/// Backend errors carry `{ message }`; fall back to the raw body text.
fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}
