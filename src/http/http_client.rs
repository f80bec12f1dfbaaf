use std::time::Duration;

use log::debug;
use reqwest::{Method, StatusCode, header};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::HttpError;

pub const DEFAULT_USER_AGENT: &str = concat!("siacentral-rs/", env!("CARGO_PKG_VERSION"));

/// Connection settings shared by every request a client makes.
///
/// Set once at construction and never mutated afterwards. `timeout` is `None`
/// by default: no deadline is imposed unless the caller asks for one.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub api_key: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_key: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: Url,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::with_client(client, config))
    }

    /// Wraps a caller-built `reqwest::Client`. Timeout and user agent from
    /// `config` are ignored; the injected client's own settings apply.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url,
            api_key: config.api_key,
            client,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a request target. Absolute `http(s)://` targets are used as-is,
    /// anything else is appended to the base URL so its path prefix survives.
    pub fn resolve(&self, target: &str) -> Result<Url, HttpError> {
        if target.starts_with("http://") || target.starts_with("https://") {
            return Ok(Url::parse(target)?);
        }

        let base = self.base_url.as_str().trim_end_matches('/');
        let sep = if target.starts_with('/') || target.starts_with('?') { "" } else { "/" };
        Ok(Url::parse(&format!("{base}{sep}{target}"))?)
    }

    /// Resolves `path` and appends `segment` as one percent-escaped path
    /// segment, so ids such as `host:9982` or `a/b` cannot alter the route.
    pub fn resolve_with_segment(&self, path: &str, segment: &str) -> Result<Url, HttpError> {
        let mut url = self.resolve(path)?;
        url.path_segments_mut()
            .map_err(|_| HttpError::UrlError(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Sends one request and decodes the body into `T`.
    ///
    /// The status code is handed back untouched alongside the decoded body;
    /// deciding whether the call succeeded is up to the caller.
    pub async fn send_request<T: DeserializeOwned>(
        &self,
        method: Method,
        target: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(StatusCode, T), HttpError> {
        let url = self.resolve(target)?;

        let mut req = match method {
            Method::GET => self.client.get(url.clone()),
            Method::POST => self.client.post(url.clone()),
            other => return Err(HttpError::UnsupportedMethod(other)),
        };

        req = req.header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            let encoded = serde_json::to_vec(&body).map_err(HttpError::InvalidBody)?;
            req = req.header(header::CONTENT_TYPE, "application/json").body(encoded);
        }
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        debug!(
            method = method.as_str(),
            url = url.as_str();
            "HTTP: Sending request"
        );

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        debug!(
            status = status.as_u16(),
            len = bytes.len();
            "HTTP: Received response"
        );

        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(HttpError::InvalidJson)?;
        let decoded = serde_json::from_value(value).map_err(HttpError::MalformedEnvelope)?;

        Ok((status, decoded))
    }
}
