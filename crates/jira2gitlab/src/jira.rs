//! Jira side of the migration: paginated issue fetch, per-issue detail
//! fetch, and the attachment download leg.

use async_trait::async_trait;
use base64::Engine;
use jira2gitlab_core::jira::{DetailResponse, Issue, SearchResponse};
use jira2gitlab_core::pagination::{check_total, PageCursor};

use crate::config::JiraConfig;
use crate::http::expect_status;
use crate::prelude::*;

/// A downloaded attachment binary plus the metadata the upload leg needs.
/// Transient: fetched, transferred, then discarded.
#[derive(Debug, Clone)]
pub struct AttachmentContent {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Read operations the orchestrator needs from the source tracker.
#[async_trait]
pub trait SourceApi {
    /// Fetch one page of a project's issues, ordered by issue id ascending.
    async fn search_page(&self, project_code: &str, start_at: u64) -> Result<SearchResponse>;

    /// Fetch the attachments and comments of one issue (single combined
    /// request).
    async fn issue_details(&self, issue_id: &str) -> Result<DetailResponse>;

    /// Download an attachment binary from its absolute content URL.
    async fn download_attachment(&self, url: &str) -> Result<AttachmentContent>;
}

/// Fetch every issue of a project, page by page, preserving the source
/// order. The first request always happens; the loop stops once the offset
/// reaches the server-reported total. Fails with a count mismatch when the
/// accumulated issues disagree with that total.
pub async fn fetch_all_issues<S: SourceApi + ?Sized>(
    source: &S,
    project_code: &str,
) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    let mut cursor = PageCursor::new();

    while !cursor.exhausted() {
        let page = source.search_page(project_code, cursor.start_at).await?;
        cursor.advance(page.max_results, page.total);
        issues.extend(page.issues);
    }

    check_total(cursor.total.unwrap_or_default(), issues.len() as u64)?;
    Ok(issues)
}

/// HTTP client for the Jira REST API, authenticated with Basic auth.
#[derive(Debug, Clone)]
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
}

impl JiraClient {
    pub fn new(config: &JiraConfig) -> Result<Self> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

        let auth_string = format!("{}:{}", config.username, config.password()?);
        let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {auth_encoded}"))
                .map_err(|e| eyre!("Invalid header value: {}", e))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SourceApi for JiraClient {
    async fn search_page(&self, project_code: &str, start_at: u64) -> Result<SearchResponse> {
        // The jql is embedded literally: `+` stands for a space and must
        // not be percent-encoded by a query builder.
        let url = format!(
            "{}/search?jql=project={}+order+by+id+asc&startAt={}",
            self.base_url, project_code, start_at
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send request to Jira: {}", e))?;

        let response = expect_status(response, reqwest::StatusCode::OK).await?;

        response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse Jira search response: {}", e))
    }

    async fn issue_details(&self, issue_id: &str) -> Result<DetailResponse> {
        let url = format!(
            "{}/issue/{}?fields=attachment,comment",
            self.base_url, issue_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send request to Jira: {}", e))?;

        let response = expect_status(response, reqwest::StatusCode::OK).await?;

        response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse Jira issue response: {}", e))
    }

    async fn download_attachment(&self, url: &str) -> Result<AttachmentContent> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| eyre!("Failed to download attachment: {}", e))?;

        let response = expect_status(response, reqwest::StatusCode::OK).await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| eyre!("Failed to read attachment content: {}", e))?;

        Ok(AttachmentContent {
            filename: filename_from_url(url),
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

/// Final path segment of an attachment URL, without query or fragment.
fn filename_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("attachment")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url_plain() {
        assert_eq!(
            filename_from_url("https://jira.example.com/secure/attachment/1/logs.txt"),
            "logs.txt"
        );
    }

    #[test]
    fn test_filename_from_url_strips_query() {
        assert_eq!(
            filename_from_url("https://jira.example.com/attachment/report.pdf?download=true"),
            "report.pdf"
        );
    }

    #[test]
    fn test_filename_from_url_trailing_slash_falls_back() {
        assert_eq!(
            filename_from_url("https://jira.example.com/attachment/"),
            "attachment"
        );
    }
}
