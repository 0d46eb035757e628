//! Pure field mapping from Jira entities to GitLab payloads.
//!
//! These functions are the whole data-mapping contract of the migration:
//! same input, same output, no clocks, no I/O. Timestamps are passed
//! through untouched so GitLab records the original creation dates.

use crate::gitlab::{CreateIssuePayload, CreateNotePayload};
use crate::jira::{Comment, Issue};

/// Placeholder written into the description when the issue has no assignee.
pub const NO_ASSIGNEE: &str = "None";

/// Map a Jira issue to the GitLab issue-creation payload.
///
/// The description embeds the reporter and assignee, which GitLab has no
/// native fields for on imported issues, followed by the original body.
/// A missing description maps to an empty trailing section.
pub fn map_issue(issue: &Issue) -> CreateIssuePayload {
    let assignee = issue
        .fields
        .assignee
        .as_ref()
        .map(|user| user.name.as_str())
        .unwrap_or(NO_ASSIGNEE);
    let description = issue.fields.description.as_deref().unwrap_or("");

    CreateIssuePayload {
        title: issue.fields.summary.clone(),
        created_at: issue.fields.created.clone(),
        description: format!(
            "Reporter: {}\n\nAssignee: {}\n\n{}",
            issue.fields.reporter.name, assignee, description
        ),
    }
}

/// Map a Jira comment to a GitLab note payload.
pub fn map_comment(comment: &Comment) -> CreateNotePayload {
    CreateNotePayload {
        created_at: comment.created.clone(),
        body: format!("Author: {}\n\n{}", comment.author.name, comment.body),
    }
}

/// Build the note payload that carries a transferred attachment.
///
/// The body is the upload reference markup exactly as GitLab returned it;
/// altering it would break the embedded link.
pub fn map_attachment_note(markdown: &str, created_at: &str) -> CreateNotePayload {
    CreateNotePayload {
        created_at: created_at.to_string(),
        body: markdown.to_string(),
    }
}
