use clap::Parser;

use crate::prelude::*;
use crate::prelude::println;

mod config;
mod gitlab;
mod http;
mod jira;
mod migrate;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "One-shot migration of Jira projects (issues, comments, attachments, status) to GitLab"
)]
pub struct App {
    /// Path to the TOML migration configuration
    pub config: std::path::PathBuf,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "JIRA2GITLAB_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    if app.global.verbose {
        println!("Loading configuration from {}", app.config.display());
    }

    let config = config::Config::load(&app.config)?;
    let source = jira::JiraClient::new(&config.jira)?;
    let destination = gitlab::GitLabClient::new(&config.gitlab)?;

    migrate::run(&config, &source, &destination).await
}
