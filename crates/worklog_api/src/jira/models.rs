use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Clone)]
pub struct Issue {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub fields: Option<IssueFields>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
}

/// A worklog as Jira echoes it back after creation.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub issue_id: Option<String>,
    #[serde(default)]
    pub time_spent: Option<String>,
    #[serde(default)]
    pub time_spent_seconds: Option<u64>,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Body of `POST issue/{key}/worklog`. `time_spent` uses Jira duration notation (`"45m"`),
/// `started` the `yyyy-MM-dd'T'HH:mm:ss.SSSZ` form.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogCreate {
    pub time_spent: String,
    pub started: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// How Jira should adjust the issue's remaining estimate when a worklog is added.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdjustEstimate {
    Leave,
    #[default]
    #[serde(other)]
    Auto,
}

impl AdjustEstimate {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustEstimate::Leave => "leave",
            AdjustEstimate::Auto => "auto",
        }
    }
}

/// What came back from a worklog creation call that did not fail at the HTTP level.
#[derive(Debug, Clone)]
pub enum WorklogCreation {
    Created(Worklog),
    /// A success status whose body is not a worklog.
    Unrecognized(Value),
}

impl WorklogCreation {
    pub(crate) fn from_body(body: Value) -> Self {
        match serde_json::from_value::<Worklog>(body.clone()) {
            Ok(worklog) if !worklog.id.trim().is_empty() => WorklogCreation::Created(worklog),
            _ => WorklogCreation::Unrecognized(body),
        }
    }
}
