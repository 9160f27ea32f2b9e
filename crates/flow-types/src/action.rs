//! Canonical action kinds for activity records.

/// Action tag of an activity record.
///
/// The set is open-ended on the wire: the backend may emit tags this client
/// has never seen, so parsing never fails and unknown tags land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ProjectCreated,
    ProjectUpdated,
    ProjectDeleted,
    ChangeMemberRole,
    RemoveMember,
    IssueCreated,
    IssueAssigned,
    IssueResolved,
    /// Any tag outside the known set.
    Other(String),
}

impl ActionKind {
    /// Parse from the wire tag (exact match).
    pub fn parse(s: &str) -> Self {
        match s {
            "PROJECT_CREATED" => ActionKind::ProjectCreated,
            "PROJECT_UPDATED" => ActionKind::ProjectUpdated,
            "PROJECT_DELETED" => ActionKind::ProjectDeleted,
            "CHANGE_MEMBER_ROLE" => ActionKind::ChangeMemberRole,
            "REMOVE_MEMBER" => ActionKind::RemoveMember,
            "ISSUE_CREATED" => ActionKind::IssueCreated,
            "ISSUE_ASSIGNED" => ActionKind::IssueAssigned,
            "ISSUE_RESOLVED" => ActionKind::IssueResolved,
            _ => ActionKind::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::ProjectCreated => "PROJECT_CREATED",
            ActionKind::ProjectUpdated => "PROJECT_UPDATED",
            ActionKind::ProjectDeleted => "PROJECT_DELETED",
            ActionKind::ChangeMemberRole => "CHANGE_MEMBER_ROLE",
            ActionKind::RemoveMember => "REMOVE_MEMBER",
            ActionKind::IssueCreated => "ISSUE_CREATED",
            ActionKind::IssueAssigned => "ISSUE_ASSIGNED",
            ActionKind::IssueResolved => "ISSUE_RESOLVED",
            ActionKind::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        for tag in [
            "PROJECT_CREATED",
            "PROJECT_UPDATED",
            "PROJECT_DELETED",
            "CHANGE_MEMBER_ROLE",
            "REMOVE_MEMBER",
            "ISSUE_CREATED",
            "ISSUE_ASSIGNED",
            "ISSUE_RESOLVED",
        ] {
            assert_eq!(ActionKind::parse(tag).as_str(), tag);
        }
    }

    #[test]
    fn unknown_tag_is_other() {
        let kind = ActionKind::parse("ISSUE_REOPENED");
        assert_eq!(kind, ActionKind::Other("ISSUE_REOPENED".to_string()));
        assert_eq!(kind.as_str(), "ISSUE_REOPENED");
    }
}
