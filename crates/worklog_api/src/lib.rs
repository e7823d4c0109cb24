//! Typed clients for the two remote systems of a worklog sync: Toggl Track as the source of
//! time entries and Jira as the sink for worklogs.

pub mod error;
mod http;
pub mod jira;
pub mod pacer;
pub mod toggl;

pub use error::{ApiError, Result};
pub use jira::{AdjustEstimate, JiraClient, JiraConfig, WorklogCreate, WorklogCreation};
pub use pacer::RequestPacer;
pub use toggl::{TogglClient, TogglConfig};
