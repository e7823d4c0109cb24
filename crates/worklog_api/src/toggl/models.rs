//! Toggl Track v9 payloads. Fields are optional wherever Toggl may omit or null them; the
//! reconciler decides what a usable entry is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// A time entry as returned by `me/time_entries`. `duration` is negative while the timer runs.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimeEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub workspace_id: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    Add,
}

#[derive(Debug, Serialize)]
pub(crate) struct TagUpdateRequest<'a> {
    pub tags: &'a [&'a str],
    pub tag_action: TagAction,
}
