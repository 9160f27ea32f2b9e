//! Activity event formatter: one display label per backend activity record.

use flow_types::{ActionKind, Activity};
use serde_json::Value;

/// Renders an activity record as a human-readable label, e.g.
/// `created project "Core"`.
///
/// Total over arbitrary input: unknown actions, missing metadata, and
/// mistyped metadata values all degrade to fallback text. The worst case is
/// `"did something"`; there is no error path.
pub fn format_activity(a: &Activity) -> String {
    let m = &a.metadata;
    let action = a.action.as_deref().unwrap_or("");
    match ActionKind::parse(action) {
        ActionKind::ProjectCreated => format!("created project \"{}\"", project_name(m)),
        ActionKind::ProjectUpdated => format!("updated project \"{}\"", project_name(m)),
        ActionKind::ProjectDeleted => format!("deleted project \"{}\"", project_name(m)),
        ActionKind::ChangeMemberRole => match (meta_str(m, "oldRole"), meta_str(m, "newRole")) {
            (Some(old), Some(new)) => format!(
                "changed {}'s role from {} → {} in {}",
                meta_str(m, "memberName").unwrap_or("a member"),
                capitalize(old),
                capitalize(new),
                project_name(m)
            ),
            // Either role missing: reduced form, no partial interpolation.
            _ => "changed a member's role".to_string(),
        },
        ActionKind::RemoveMember => format!(
            "removed {} from {}",
            meta_str(m, "memberName").unwrap_or("a member"),
            project_name(m)
        ),
        ActionKind::IssueCreated => {
            format!("created issue \"{}\" in {}", issue_title(m), project_name(m))
        }
        ActionKind::IssueAssigned => format!(
            "assigned issue \"{}\" to {}",
            issue_title(m),
            meta_str(m, "assigneeName").unwrap_or("someone")
        ),
        ActionKind::IssueResolved => format!("resolved issue \"{}\"", issue_title(m)),
        ActionKind::Other(tag) => {
            if tag.is_empty() {
                "did something".to_string()
            } else {
                tag.to_lowercase().replace('_', " ")
            }
        }
    }
}

/// String value of a metadata key. A key that is absent, or present with a
/// non-string value, counts as missing.
fn meta_str<'a>(m: &'a Value, key: &str) -> Option<&'a str> {
    m.get(key).and_then(Value::as_str)
}

fn project_name(m: &Value) -> &str {
    meta_str(m, "projectName")
        .or_else(|| meta_str(m, "name"))
        .unwrap_or("a project")
}

fn issue_title(m: &Value) -> &str {
    meta_str(m, "issueTitle")
        .or_else(|| meta_str(m, "title"))
        .unwrap_or("an issue")
}

/// First letter upper, rest unchanged ("member" -> "Member").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
