use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::pacer::{parse_retry_after, RequestPacer};

/// Pause after a `429` that carries no usable `Retry-After`.
const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);

/// Connection settings common to both remote systems.
pub(crate) struct HttpSettings<'a> {
    pub api_root: String,
    pub user: &'a str,
    pub secret: &'a str,
    pub user_agent: &'a str,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

/// Paced JSON-over-HTTP transport with Basic authentication baked into the default headers.
#[derive(Clone)]
pub(crate) struct ApiHttp {
    http: HttpClient,
    api_root: String,
    pacer: RequestPacer,
}

impl ApiHttp {
    pub fn new(settings: HttpSettings<'_>, pacer: RequestPacer) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let credentials = BASE64_STANDARD.encode(format!("{}:{}", settings.user, settings.secret));
        let mut auth_value = header_value(format!("Basic {}", credentials))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value(settings.user_agent.to_string())?);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| ApiError::Other(err.to_string()))?;

        Ok(Self {
            http,
            api_root: settings.api_root,
            pacer,
        })
    }

    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(Method::GET, path, query, Option::<&Value>::None)
            .await
    }

    pub async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, query, body).await?;
        parse_json(response).await
    }

    /// Like [`send_json`](Self::send_json) but accepts any successful body: an empty body
    /// becomes `Value::Null` and non-JSON text becomes `Value::String`.
    pub async fn send_lenient<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(method, path, query, body).await?;
        let response = ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Sends one paced request. A `429` pushes the pacer back by the server's `Retry-After`
    /// so the following requests of the run slow down; the throttled request itself still fails.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.pacer.wait_turn().await;
        let url = self.url_for(path);
        debug!("sending {} {}", method, url);
        let mut request = self.http.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let delay = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(parse_retry_after)
                .unwrap_or(DEFAULT_BACKOFF);
            self.pacer.back_off(delay).await;
        }
        Ok(response)
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.api_root.clone();
        base.push_str(path.trim_start_matches('/'));
        base
    }
}

/// Joins a base URL and an API prefix into a root that always ends with `/`.
pub(crate) fn api_root(base_url: &str, prefix: &str) -> String {
    format!(
        "{}/{}/",
        base_url.trim_end_matches('/'),
        prefix.trim_matches('/')
    )
}

async fn parse_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(ApiError::from)
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("request failed with {}", status);
    Err(match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(body),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ApiError::Authentication(format!("Access denied ({}) - {}", status, body))
        }
        _ => build_http_error(status, &body),
    })
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| ApiError::Other(err.to_string()))
}

fn build_http_error(status: StatusCode, body: &str) -> ApiError {
    ApiError::http(status, extract_error_code(body), body.to_string())
}

/// Jira reports `{"errorMessages":[..]}`, Toggl a bare string or `{"code":..}`.
fn extract_error_code(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    value
        .get("code")
        .and_then(|c| {
            c.as_str()
                .map(str::to_string)
                .or_else(|| c.as_i64().map(|n| n.to_string()))
        })
        .or_else(|| {
            value
                .get("errorMessages")
                .and_then(|messages| messages.get(0))
                .and_then(|first| first.as_str())
                .map(str::to_string)
        })
}
