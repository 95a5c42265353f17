//! Transport-agnostic request descriptors.

use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::ClientResult;
use crate::query::to_query_pairs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which base path a request is resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaseScope {
    /// The feature module's own API.
    #[default]
    Module,
    /// The host shell's administrative API.
    Admin,
}

/// One HTTP call, fully shaped but not yet sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub scope: BaseScope,
    /// Path relative to the scope's base, starting with `/`.
    pub path: String,
    /// Query pairs in emission order; repeated keys are allowed.
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            scope: BaseScope::Module,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Resolves the request against the admin base path.
    pub fn admin(mut self) -> Self {
        self.scope = BaseScope::Admin;
        self
    }

    /// Appends the flattened fields of `params` to the query.
    pub fn with_query<T: Serialize>(mut self, params: &T) -> ClientResult<Self> {
        self.query.extend(to_query_pairs(params)?);
        Ok(self)
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> ClientResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Percent-encoded `k=v&k=v` rendering of the query, empty when there
    /// are no pairs.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Values of every query pair with the given key, in order.
    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Percent-encodes a value for use as a single path segment.
    pub fn segment(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}

/// Per-call options: header overrides and cancellation.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Headers applied after the defaults, replacing same-named ones.
    pub headers: Vec<(String, String)>,
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
