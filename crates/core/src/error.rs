//! Error taxonomy shared by the core and the shell.
//!
//! The migration contract is fail-fast: the first error of either kind
//! halts the whole run. Nothing in this tool retries or rolls back.

/// Errors the migration can surface.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An HTTP call returned a status other than the one expected for
    /// that operation. Carries the original URL and raw response body so
    /// the diagnostic on stderr is enough to investigate.
    #[error("{url} [{status}]: {body}")]
    Api {
        url: String,
        status: u16,
        body: String,
    },

    /// The paginated search loop accumulated a different number of issues
    /// than the total the server reported.
    #[error("Expected {expected} but retrieved {actual} issues.")]
    CountMismatch { expected: u64, actual: u64 },
}

impl Error {
    /// Build an `Api` error from the parts every HTTP helper has at hand.
    pub fn api(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            url: url.into(),
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_url_and_body() {
        let err = Error::api("https://gitlab.example.com/api/v4/projects", 403, "forbidden");
        let msg = err.to_string();
        assert!(msg.contains("https://gitlab.example.com/api/v4/projects"));
        assert!(msg.contains("403"));
        assert!(msg.contains("forbidden"));
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = Error::CountMismatch {
            expected: 10,
            actual: 7,
        };
        assert_eq!(err.to_string(), "Expected 10 but retrieved 7 issues.");
    }
}
