//! The migration orchestrator.
//!
//! One forward pass over the configured projects, strictly sequential:
//! fetch all source issues, resolve or create the destination project,
//! then per issue create, optionally close, and replay attachments and
//! comments as notes. The first error anywhere propagates out and halts
//! the entire run; nothing already written to GitLab is cleaned up.

use jira2gitlab_core::gitlab::NewProject;
use jira2gitlab_core::jira::Issue;
use jira2gitlab_core::mapper;

use crate::config::{Config, ProjectMapping, ProjectTarget};
use crate::gitlab::DestinationApi;
use crate::jira::{fetch_all_issues, SourceApi};
use crate::prelude::*;

/// Run the migration for every configured project, in order.
pub async fn run<S, D>(config: &Config, source: &S, destination: &D) -> Result<()>
where
    S: SourceApi,
    D: DestinationApi,
{
    for mapping in &config.projects {
        migrate_project(config, source, destination, mapping).await?;
    }
    Ok(())
}

async fn migrate_project<S, D>(
    config: &Config,
    source: &S,
    destination: &D,
    mapping: &ProjectMapping,
) -> Result<()>
where
    S: SourceApi,
    D: DestinationApi,
{
    log::info!("Migrating project {}", mapping.code);

    let issues = fetch_all_issues(source, &mapping.code).await?;
    log::info!("Fetched {} issue(s) for {}", issues.len(), mapping.code);

    let project_id = match &mapping.target {
        ProjectTarget::Existing { project_id } => *project_id,
        ProjectTarget::Create { name, path } => {
            let namespace_id = config
                .gitlab
                .namespace_id
                .ok_or_eyre("gitlab.namespace_id is required to create projects")?;
            let path = path.clone().unwrap_or_else(|| mapping.code.clone());

            let project = NewProject::new(
                name.clone(),
                path,
                namespace_id,
                config.gitlab.visibility.clone(),
            );
            destination.create_project(&project).await?
        }
    };

    for issue in &issues {
        migrate_issue(source, destination, project_id, issue).await?;
    }

    Ok(())
}

/// Migrate one issue: create it, close it when the source says it is done,
/// then attach notes — attachments first, comments second, each in source
/// order.
async fn migrate_issue<S, D>(
    source: &S,
    destination: &D,
    project_id: u64,
    issue: &Issue,
) -> Result<()>
where
    S: SourceApi,
    D: DestinationApi,
{
    log::debug!("Migrating issue {}", issue.id);

    let issue_iid = destination
        .create_issue(project_id, &mapper::map_issue(issue))
        .await?;

    if issue.is_done() {
        destination.close_issue(project_id, issue_iid).await?;
    }

    let details = source.issue_details(&issue.id).await?;

    for attachment in &details.fields.attachment {
        let content = source.download_attachment(&attachment.content).await?;
        let markdown = destination.upload_file(project_id, content).await?;
        destination
            .create_note(
                project_id,
                issue_iid,
                &mapper::map_attachment_note(&markdown, &attachment.created),
            )
            .await?;
    }

    for comment in &details.fields.comment.comments {
        destination
            .create_note(project_id, issue_iid, &mapper::map_comment(comment))
            .await?;
    }

    Ok(())
}
