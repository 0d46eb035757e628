//! Migration configuration.
//!
//! Loaded once from a TOML file before anything touches the network and
//! passed by reference from there on; there is no ambient global state.
//! Secrets may be left out of the file and supplied through `JIRA_PASSWORD`
//! / `GITLAB_TOKEN` instead.
//!
//! ```toml
//! [jira]
//! base_url = "https://my-organization.atlassian.net/rest/api/2"
//! username = "my-jira-username"
//! password = "my-jira-password"       # or JIRA_PASSWORD
//!
//! [gitlab]
//! base_url = "https://my-gitlab.example.com/api/v4"
//! token = "my-gitlab-token"           # or GITLAB_TOKEN
//! namespace_id = 123                  # required only for create-mode projects
//! visibility = "private"
//!
//! [[projects]]
//! code = "ABC"
//! name = "My Project"                 # create a new GitLab project
//!
//! [[projects]]
//! code = "OPS"
//! project_id = 42                     # migrate into an existing project
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::prelude::*;

/// Immutable configuration for one migration run.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub jira: JiraConfig,
    pub gitlab: GitLabConfig,
    #[serde(default)]
    pub projects: Vec<ProjectMapping>,
}

/// Jira connection settings (Basic auth).
#[derive(Debug, Deserialize, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub username: String,
    #[serde(default)]
    password: Option<String>,
}

/// GitLab connection settings (private token).
#[derive(Debug, Deserialize, Clone)]
pub struct GitLabConfig {
    pub base_url: String,
    #[serde(default)]
    token: Option<String>,
    /// Group to create new projects under. Only needed in create mode.
    #[serde(default)]
    pub namespace_id: Option<u64>,
    /// Visibility of newly created projects.
    #[serde(default = "default_visibility")]
    pub visibility: String,
}

fn default_visibility() -> String {
    "private".to_string()
}

/// One source project and where it lands on the GitLab side.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectMapping {
    /// Jira project code (the `project = {code}` part of the JQL query).
    pub code: String,
    #[serde(flatten)]
    pub target: ProjectTarget,
}

/// Destination of one project migration: an existing GitLab project id, or
/// a name (plus optional path, defaulting to the Jira code) to create.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ProjectTarget {
    Existing {
        project_id: u64,
    },
    Create {
        name: String,
        #[serde(default)]
        path: Option<String>,
    },
}

impl Config {
    /// Read and validate the configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would only fail halfway through a run.
    fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(eyre!("No projects configured; nothing to migrate"));
        }

        let has_create_mode = self
            .projects
            .iter()
            .any(|p| matches!(p.target, ProjectTarget::Create { .. }));
        if has_create_mode && self.gitlab.namespace_id.is_none() {
            return Err(eyre!(
                "gitlab.namespace_id is required when a project is configured for creation"
            ));
        }

        Ok(())
    }
}

impl JiraConfig {
    /// Jira password, from the file or the `JIRA_PASSWORD` environment.
    pub fn password(&self) -> Result<String> {
        match &self.password {
            Some(password) => Ok(password.clone()),
            None => std::env::var("JIRA_PASSWORD").map_err(|_| {
                eyre!("jira.password not set in config and JIRA_PASSWORD environment variable not set")
            }),
        }
    }
}

impl GitLabConfig {
    /// GitLab private token, from the file or the `GITLAB_TOKEN` environment.
    pub fn token(&self) -> Result<String> {
        match &self.token {
            Some(token) => Ok(token.clone()),
            None => std::env::var("GITLAB_TOKEN").map_err(|_| {
                eyre!("gitlab.token not set in config and GITLAB_TOKEN environment variable not set")
            }),
        }
    }
}
