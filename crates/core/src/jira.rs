//! Wire types for the Jira REST API responses the migration consumes.
//!
//! Only the fields the migration actually reads are modeled. Optional
//! collections (`attachment`, the comment container) default to empty when
//! absent; `reporter` is deliberately required, so an issue without one
//! fails deserialization loudly instead of migrating with a fabricated
//! reporter.

use serde::Deserialize;

/// Status category name Jira uses for resolved issues.
pub const DONE_CATEGORY: &str = "Done";

/// Response from `GET /search?jql=...&startAt={n}`
#[derive(Debug, Deserialize, Clone)]
pub struct SearchResponse {
    #[serde(rename = "startAt")]
    pub start_at: u64,
    #[serde(rename = "maxResults")]
    pub max_results: u64,
    pub total: u64,
    pub issues: Vec<Issue>,
}

/// A single Jira issue from the search endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct Issue {
    pub id: String,
    pub fields: IssueFields,
}

/// Fields from a Jira issue.
#[derive(Debug, Deserialize, Clone)]
pub struct IssueFields {
    pub summary: String,
    pub created: String,
    pub reporter: User,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
}

/// Jira status field.
#[derive(Debug, Deserialize, Clone)]
pub struct Status {
    #[serde(rename = "statusCategory")]
    pub status_category: StatusCategory,
}

/// Jira status category field.
#[derive(Debug, Deserialize, Clone)]
pub struct StatusCategory {
    pub name: String,
}

/// Jira user reference (reporter, assignee, comment author).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct User {
    pub name: String,
}

impl Issue {
    /// Whether the source issue is resolved and the migrated issue should
    /// be closed after creation.
    pub fn is_done(&self) -> bool {
        self.fields.status.status_category.name == DONE_CATEGORY
    }
}

/// Response from `GET /issue/{id}?fields=attachment,comment`
#[derive(Debug, Deserialize, Clone)]
pub struct DetailResponse {
    pub fields: DetailFields,
}

/// Attachment and comment collections of one issue.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DetailFields {
    #[serde(default)]
    pub attachment: Vec<Attachment>,
    #[serde(default)]
    pub comment: CommentList,
}

/// Jira wraps comments in a container object.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommentList {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Attachment metadata. The binary lives at the absolute `content` URL and
/// is only ever held in memory while it is transferred.
#[derive(Debug, Deserialize, Clone)]
pub struct Attachment {
    /// Absolute URL of the attachment binary.
    pub content: String,
    pub created: String,
}

/// A comment on a Jira issue.
#[derive(Debug, Deserialize, Clone)]
pub struct Comment {
    pub author: User,
    pub created: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_json(status_category: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "10042",
            "fields": {
                "summary": "Fix login timeout",
                "created": "2017-03-01T09:30:00.000+0000",
                "reporter": {"name": "alice"},
                "assignee": {"name": "bob"},
                "description": "Session expires too early.",
                "status": {"statusCategory": {"name": status_category}}
            }
        })
    }

    #[test]
    fn test_search_response_deserializes() {
        let json = serde_json::json!({
            "startAt": 0,
            "maxResults": 50,
            "total": 1,
            "issues": [issue_json("To Do")]
        });

        let response: SearchResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.start_at, 0);
        assert_eq!(response.max_results, 50);
        assert_eq!(response.total, 1);
        assert_eq!(response.issues.len(), 1);

        let issue = &response.issues[0];
        assert_eq!(issue.id, "10042");
        assert_eq!(issue.fields.summary, "Fix login timeout");
        assert_eq!(issue.fields.reporter.name, "alice");
        assert_eq!(issue.fields.assignee, Some(User { name: "bob".into() }));
        assert!(!issue.is_done());
    }

    #[test]
    fn test_issue_null_assignee_and_description() {
        let json = serde_json::json!({
            "id": "10043",
            "fields": {
                "summary": "Unassigned issue",
                "created": "2017-03-02T10:00:00.000+0000",
                "reporter": {"name": "alice"},
                "assignee": null,
                "description": null,
                "status": {"statusCategory": {"name": "Done"}}
            }
        });

        let issue: Issue = serde_json::from_value(json).unwrap();
        assert_eq!(issue.fields.assignee, None);
        assert_eq!(issue.fields.description, None);
        assert!(issue.is_done());
    }

    #[test]
    fn test_issue_without_reporter_is_an_error() {
        let json = serde_json::json!({
            "id": "10044",
            "fields": {
                "summary": "No reporter",
                "created": "2017-03-02T10:00:00.000+0000",
                "status": {"statusCategory": {"name": "To Do"}}
            }
        });

        assert!(serde_json::from_value::<Issue>(json).is_err());
    }

    #[test]
    fn test_detail_response_deserializes() {
        let json = serde_json::json!({
            "fields": {
                "attachment": [
                    {"content": "https://jira.example.com/secure/attachment/1/logs.txt",
                     "created": "2017-03-03T11:00:00.000+0000"}
                ],
                "comment": {
                    "comments": [
                        {"author": {"name": "carol"},
                         "created": "2017-03-04T12:00:00.000+0000",
                         "body": "Reproduced on staging."}
                    ]
                }
            }
        });

        let detail: DetailResponse = serde_json::from_value(json).unwrap();
        assert_eq!(detail.fields.attachment.len(), 1);
        assert_eq!(
            detail.fields.attachment[0].content,
            "https://jira.example.com/secure/attachment/1/logs.txt"
        );
        assert_eq!(detail.fields.comment.comments.len(), 1);
        assert_eq!(detail.fields.comment.comments[0].author.name, "carol");
    }

    #[test]
    fn test_detail_response_missing_collections_default_to_empty() {
        let json = serde_json::json!({ "fields": {} });

        let detail: DetailResponse = serde_json::from_value(json).unwrap();
        assert!(detail.fields.attachment.is_empty());
        assert!(detail.fields.comment.comments.is_empty());
    }
}
