use std::time::Duration;

use crate::http::api_root;

pub const DEFAULT_API_BASE: &str = "https://api.track.toggl.com";
pub const API_PREFIX: &str = "api/v9";
pub const DEFAULT_USER_AGENT: &str = "worklog-sync";
pub const DEFAULT_COOLDOWN_MS: u64 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct TogglConfig {
    pub base_url: String,
    pub api_token: String,
    pub workspace_id: i64,
    pub user_agent: String,
    pub cooldown: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl TogglConfig {
    pub fn new(api_token: impl Into<String>, workspace_id: i64) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_token: api_token.into(),
            workspace_id,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = duration;
        self
    }

    pub fn api_root(&self) -> String {
        api_root(&self.base_url, API_PREFIX)
    }
}
