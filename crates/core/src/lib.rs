//! Core library for jira2gitlab
//!
//! This crate implements the **Functional Core** of the jira2gitlab
//! migration tool, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! - **`jira2gitlab_core`** (this crate): pure types and transformation
//!   functions with zero I/O
//! - **`jira2gitlab`**: HTTP clients and the migration orchestrator
//!   (the Imperative Shell)
//!
//! Everything here is deterministic: the same Jira payload always maps to
//! the same GitLab payload, and the pagination cursor is plain arithmetic.
//! That keeps the interesting migration rules testable with fixture data,
//! no mocking required.
//!
//! # Module Organization
//!
//! - [`jira`]: wire types for the Jira REST payloads the tool consumes
//! - [`gitlab`]: form payloads and response types for the GitLab API
//! - [`mapper`]: pure field mapping from Jira entities to GitLab payloads
//! - [`pagination`]: offset cursor for the paginated Jira search endpoint
//! - [`error`]: the typed error taxonomy shared by both crates

pub mod error;
pub mod gitlab;
pub mod jira;
pub mod mapper;
pub mod pagination;

pub use error::Error;
