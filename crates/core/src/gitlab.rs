//! Form payloads and response types for the GitLab REST API.
//!
//! Payload structs derive `Serialize` so the shell can hand them straight
//! to `reqwest`'s form encoder; field names match the GitLab form fields.

use serde::{Deserialize, Serialize};

/// Form fields for `POST /projects/{id}/issues`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CreateIssuePayload {
    pub title: String,
    pub created_at: String,
    pub description: String,
}

/// Form fields for `POST /projects/{id}/issues/{iid}/notes`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CreateNotePayload {
    pub created_at: String,
    pub body: String,
}

/// Form fields for `POST /projects`.
///
/// The feature toggles disable everything except issues on the freshly
/// created project; the migration only ever writes issues and notes.
#[derive(Debug, Serialize, Clone)]
pub struct NewProject {
    pub name: String,
    pub path: String,
    pub namespace_id: u64,
    pub visibility: String,
    pub container_registry_enabled: bool,
    pub issues_enabled: bool,
    pub jobs_enabled: bool,
    pub merge_requests_enabled: bool,
    pub shared_runners_enabled: bool,
    pub snippets_enabled: bool,
    pub wiki_enabled: bool,
}

impl NewProject {
    pub fn new(name: String, path: String, namespace_id: u64, visibility: String) -> Self {
        Self {
            name,
            path,
            namespace_id,
            visibility,
            container_registry_enabled: false,
            issues_enabled: true,
            jobs_enabled: false,
            merge_requests_enabled: false,
            shared_runners_enabled: false,
            snippets_enabled: false,
            wiki_enabled: false,
        }
    }
}

/// Response from `POST /projects`.
#[derive(Debug, Deserialize, Clone)]
pub struct CreatedProject {
    pub id: u64,
}

/// Response from `POST /projects/{id}/issues`.
#[derive(Debug, Deserialize, Clone)]
pub struct CreatedIssue {
    pub iid: u64,
}

/// Response from `POST /projects/{id}/uploads`. The `markdown` field is the
/// reference markup that embeds the uploaded file in a note body.
#[derive(Debug, Deserialize, Clone)]
pub struct Upload {
    pub markdown: String,
}
