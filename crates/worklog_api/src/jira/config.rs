use std::time::Duration;

use crate::http::api_root;

pub const API_PREFIX: &str = "rest/api/2";
pub const DEFAULT_USER_AGENT: &str = "worklog-sync";
pub const DEFAULT_COOLDOWN_MS: u64 = 200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for a Jira server or Cloud site. Jira Cloud takes the account e-mail as
/// `user` and an API token as the secret; Server/Data Center accepts a password there.
#[derive(Clone, Debug)]
pub struct JiraConfig {
    pub base_url: String,
    pub user: String,
    pub api_token: String,
    pub user_agent: String,
    pub cooldown: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl JiraConfig {
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            user: user.into(),
            api_token: api_token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = duration;
        self
    }

    pub fn api_root(&self) -> String {
        api_root(&self.base_url, API_PREFIX)
    }
}
