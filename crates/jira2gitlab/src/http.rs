//! Shared HTTP response checking.

use jira2gitlab_core::Error;

use crate::prelude::*;

/// Check that a response carries exactly the status code the operation
/// expects, consuming it into an `Error::Api` (URL, status, raw body)
/// otherwise. Each tracker endpoint has one expected code; anything else
/// aborts the run.
pub async fn expect_status(
    response: reqwest::Response,
    expected: reqwest::StatusCode,
) -> Result<reqwest::Response> {
    if response.status() == expected {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(Error::api(url, status, body).into())
}
