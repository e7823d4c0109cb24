use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use tracing::debug;

use super::config::TogglConfig;
use super::models::{Project, TagAction, TagUpdateRequest, TimeEntry};
use crate::error::Result;
use crate::http::{ApiHttp, HttpSettings};
use crate::pacer::RequestPacer;

/// Toggl authenticates API tokens as the user name with this fixed password.
const API_TOKEN_PASSWORD: &str = "api_token";

#[derive(Clone)]
pub struct TogglClient {
    http: ApiHttp,
    config: TogglConfig,
}

impl TogglClient {
    pub fn new(config: TogglConfig) -> Result<Self> {
        let pacer = RequestPacer::new(config.cooldown);
        let http = ApiHttp::new(
            HttpSettings {
                api_root: config.api_root(),
                user: &config.api_token,
                secret: API_TOKEN_PASSWORD,
                user_agent: &config.user_agent,
                timeout: config.timeout,
                connect_timeout: config.connect_timeout,
            },
            pacer,
        )?;
        Ok(Self { http, config })
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let path = format!("workspaces/{}/projects", self.config.workspace_id);
        self.http.get_json(&path, &[]).await
    }

    /// Entries of the configured workspace whose start lies in `[start, end]`, oldest first.
    ///
    /// `me/time_entries` spans every workspace of the user, but tags can only be written through
    /// the configured one, so entries of other workspaces are dropped here. Toggl answers newest
    /// first; the order is flipped so the last element is the most recently started entry.
    pub async fn list_time_entries(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeEntry>> {
        let start_date = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end_date = end.to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut entries: Vec<TimeEntry> = self
            .http
            .get_json(
                "me/time_entries",
                &[
                    ("start_date", start_date.as_str()),
                    ("end_date", end_date.as_str()),
                ],
            )
            .await?;
        let fetched = entries.len();
        let workspace_id = self.config.workspace_id;
        entries.retain(|entry| entry.workspace_id.map_or(true, |id| id == workspace_id));
        if entries.len() < fetched {
            debug!(
                "ignored {} time entries outside workspace {}",
                fetched - entries.len(),
                workspace_id
            );
        }
        entries.reverse();
        Ok(entries)
    }

    /// Adds `tag` to the entry, keeping the tags it already has. Returns the updated entry.
    pub async fn add_entry_tag(&self, entry_id: i64, tag: &str) -> Result<TimeEntry> {
        let path = format!(
            "workspaces/{}/time_entries/{}",
            self.config.workspace_id, entry_id
        );
        let tags = [tag];
        let payload = TagUpdateRequest {
            tags: &tags,
            tag_action: TagAction::Add,
        };
        self.http
            .send_json(Method::PUT, &path, &[], Some(&payload))
            .await
    }
}
