//! GitLab side of the migration: project/issue/note creation, issue close,
//! and the attachment upload leg.

use async_trait::async_trait;
use jira2gitlab_core::gitlab::{
    CreateIssuePayload, CreateNotePayload, CreatedIssue, CreatedProject, NewProject, Upload,
};

use crate::config::GitLabConfig;
use crate::http::expect_status;
use crate::jira::AttachmentContent;
use crate::prelude::*;

/// Write operations the orchestrator needs from the destination tracker.
#[async_trait]
pub trait DestinationApi {
    /// Create a GitLab project, returning its id.
    async fn create_project(&self, project: &NewProject) -> Result<u64>;

    /// Create an issue, returning its project-scoped iid.
    async fn create_issue(&self, project_id: u64, payload: &CreateIssuePayload) -> Result<u64>;

    /// Transition an open issue to closed. Called at most once per migrated
    /// issue; closing an already-closed issue is not guarded against.
    async fn close_issue(&self, project_id: u64, issue_iid: u64) -> Result<()>;

    /// Upload a file to the project, returning the reference markup that
    /// embeds it in rich text. Takes ownership of the attachment so the
    /// binary is moved into the multipart body rather than copied.
    async fn upload_file(&self, project_id: u64, attachment: AttachmentContent) -> Result<String>;

    /// Create a note on an issue. The note handle GitLab returns is unused.
    async fn create_note(
        &self,
        project_id: u64,
        issue_iid: u64,
        payload: &CreateNotePayload,
    ) -> Result<()>;
}

/// HTTP client for the GitLab REST API. The private token is sent as a
/// request parameter on every call.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitLabClient {
    pub fn new(config: &GitLabConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token()?,
        })
    }

    fn token_param(&self) -> [(&'static str, &str); 1] {
        [("private_token", self.token.as_str())]
    }
}

#[async_trait]
impl DestinationApi for GitLabClient {
    async fn create_project(&self, project: &NewProject) -> Result<u64> {
        let url = format!("{}/projects", self.base_url);

        let response = self
            .client
            .post(&url)
            .query(&self.token_param())
            .form(project)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send request to GitLab: {}", e))?;

        let response = expect_status(response, reqwest::StatusCode::CREATED).await?;

        let created: CreatedProject = response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse GitLab project response: {}", e))?;

        Ok(created.id)
    }

    async fn create_issue(&self, project_id: u64, payload: &CreateIssuePayload) -> Result<u64> {
        let url = format!("{}/projects/{}/issues", self.base_url, project_id);

        let response = self
            .client
            .post(&url)
            .query(&self.token_param())
            .form(payload)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send request to GitLab: {}", e))?;

        let response = expect_status(response, reqwest::StatusCode::CREATED).await?;

        let created: CreatedIssue = response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse GitLab issue response: {}", e))?;

        Ok(created.iid)
    }

    async fn close_issue(&self, project_id: u64, issue_iid: u64) -> Result<()> {
        let url = format!(
            "{}/projects/{}/issues/{}",
            self.base_url, project_id, issue_iid
        );

        let response = self
            .client
            .put(&url)
            .query(&self.token_param())
            .form(&[("state_event", "close")])
            .send()
            .await
            .map_err(|e| eyre!("Failed to send request to GitLab: {}", e))?;

        expect_status(response, reqwest::StatusCode::OK).await?;
        Ok(())
    }

    async fn upload_file(&self, project_id: u64, attachment: AttachmentContent) -> Result<String> {
        let url = format!("{}/projects/{}/uploads", self.base_url, project_id);

        let part = reqwest::multipart::Part::bytes(attachment.bytes)
            .file_name(attachment.filename)
            .mime_str(&attachment.content_type)
            .map_err(|e| eyre!("Invalid MIME type: {}", e))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .query(&self.token_param())
            .multipart(form)
            .send()
            .await
            .map_err(|e| eyre!("Failed to upload attachment: {}", e))?;

        let response = expect_status(response, reqwest::StatusCode::CREATED).await?;

        let upload: Upload = response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse GitLab upload response: {}", e))?;

        Ok(upload.markdown)
    }

    async fn create_note(
        &self,
        project_id: u64,
        issue_iid: u64,
        payload: &CreateNotePayload,
    ) -> Result<()> {
        let url = format!(
            "{}/projects/{}/issues/{}/notes",
            self.base_url, project_id, issue_iid
        );

        let response = self
            .client
            .post(&url)
            .query(&self.token_param())
            .form(payload)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send request to GitLab: {}", e))?;

        expect_status(response, reqwest::StatusCode::CREATED).await?;
        Ok(())
    }
}
