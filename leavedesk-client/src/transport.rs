//! HTTP execution of [`ApiRequest`]s.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::{ApiRequest, RequestOptions};
use crate::token::{NoAuth, StaticToken, TokenSource};

/// Executes shaped requests and returns the decoded JSON body.
///
/// Implementations must surface non-2xx responses as
/// [`ClientError::Transport`] and honor the cancellation token in
/// `options`, failing with [`ClientError::Cancelled`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest, options: &RequestOptions) -> ClientResult<Value>;
}

/// Decodes a JSON body into a typed response.
pub fn decode<R: DeserializeOwned>(value: Value) -> ClientResult<R> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode(format!("response body: {e}")))
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    http: Client,
    config: ClientConfig,
    token_source: Arc<dyn TokenSource>,
}

impl HttpTransport {
    pub fn new(config: ClientConfig, token_source: Arc<dyn TokenSource>) -> ClientResult<Self> {
        config.validate()?;
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            config,
            token_source,
        })
    }

    /// Uses the config's static token when present, anonymous otherwise.
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        let token_source: Arc<dyn TokenSource> = match &config.token {
            Some(token) => Arc::new(StaticToken::new(token.clone())),
            None => Arc::new(NoAuth),
        };
        Self::new(config, token_source)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL of a request, without the query.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.config.base_url(request.scope), request.path)
    }

    async fn headers(&self, options: &RequestOptions) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.token_source.token().await? {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::Auth("token is not a valid header value".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::Config(format!("invalid header name '{name}'")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ClientError::Config(format!("invalid value for header '{name}'")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    async fn send(&self, request: ApiRequest, options: &RequestOptions) -> ClientResult<Value> {
        let url = self.url_for(&request);
        let headers = self.headers(options).await?;

        let mut builder = self
            .http
            .request(request.method.to_reqwest(), &url)
            .headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        debug!(method = %request.method, url = %url, query = %request.query_string(), "Sending request");
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(method = %request.method, url = %url, status = status.as_u16(), "Request failed");
            return Err(ClientError::Transport {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(format!("response body: {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest, options: &RequestOptions) -> ClientResult<Value> {
        let Some(token) = &options.cancel else {
            return self.send(request, options).await;
        };
        if token.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        let path = request.path.clone();
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(path = %path, "Request cancelled");
                Err(ClientError::Cancelled)
            }
            result = self.send(request, options) => result,
        }
    }
}
