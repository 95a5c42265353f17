//! Module health and dashboard statistics.

use std::sync::Arc;

use leavedesk_client::{ApiRequest, ClientResult, RequestOptions, Transport};
use leavedesk_types::{HealthStatus, HrStats, StatsEnvelope};

use super::fetch;

pub fn health_request() -> ApiRequest {
    ApiRequest::get("/health")
}

pub fn stats_request() -> ApiRequest {
    ApiRequest::get("/stats")
}

#[derive(Clone)]
pub struct SystemService {
    transport: Arc<dyn Transport>,
}

impl SystemService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn health(&self, options: &RequestOptions) -> ClientResult<HealthStatus> {
        fetch(self.transport.as_ref(), health_request(), options).await
    }

    pub async fn stats(&self, options: &RequestOptions) -> ClientResult<HrStats> {
        let envelope: StatsEnvelope = fetch(self.transport.as_ref(), stats_request(), options).await?;
        Ok(envelope.stats)
    }
}
