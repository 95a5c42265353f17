//! Bearer token sources.
//!
//! The shell owns the user's credentials; modules only ask for the current
//! access token right before each request.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ClientResult;

/// Pluggable token provider. Called before every API request.
///
/// Returns `Ok(None)` to send the request without an `Authorization`
/// header.
#[async_trait]
pub trait TokenSource: Send + Sync + 'static {
    async fn token(&self) -> ClientResult<Option<String>>;
}

/// Anonymous requests.
pub struct NoAuth;

#[async_trait]
impl TokenSource for NoAuth {
    async fn token(&self) -> ClientResult<Option<String>> {
        Ok(None)
    }
}

/// A fixed bearer token obtained elsewhere.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> ClientResult<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}

/// Token slot shared with the host's access store.
///
/// The host writes the current token on login/refresh and clears it on
/// logout; every clone observes the same slot.
#[derive(Clone, Default)]
pub struct SharedToken {
    slot: Arc<RwLock<Option<String>>>,
}

impl SharedToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, token: impl Into<String>) {
        *self.slot.write().await = Some(token.into());
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

#[async_trait]
impl TokenSource for SharedToken {
    async fn token(&self) -> ClientResult<Option<String>> {
        Ok(self.slot.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_auth_returns_none() {
        assert!(NoAuth.token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn static_token_returns_value() {
        let ts = StaticToken::new("my-jwt-token");
        assert_eq!(ts.token().await.unwrap(), Some("my-jwt-token".to_string()));
    }

    #[test]
    fn shared_token_follows_the_host() {
        let shared = SharedToken::new();
        let view = shared.clone();
        tokio_test::block_on(async {
            assert_eq!(view.token().await.unwrap(), None);
            shared.set("t1").await;
            assert_eq!(view.token().await.unwrap(), Some("t1".to_string()));
            shared.clear().await;
            assert_eq!(view.token().await.unwrap(), None);
        });
    }
}
