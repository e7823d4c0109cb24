//! Jira REST v2 client: issue lookup and worklog creation.

mod client;
mod config;
mod models;

pub use client::JiraClient;
pub use config::JiraConfig;
pub use models::{AdjustEstimate, Issue, IssueFields, Worklog, WorklogCreate, WorklogCreation};
