//! User lookup against the shell's admin API.
//!
//! This is the only call resolved against the admin base path instead of
//! the module's own.

use std::sync::Arc;

use leavedesk_client::{ApiRequest, ClientResult, RequestOptions, Transport};
use leavedesk_types::{AdminUser, ListResponse, Paging, UserFilter};

use super::fetch;

pub fn list_users_request(filter: &UserFilter, paging: &Paging) -> ClientResult<ApiRequest> {
    ApiRequest::get("/users")
        .admin()
        .with_query(filter)?
        .with_query(paging)
}

#[derive(Clone)]
pub struct AdminService {
    transport: Arc<dyn Transport>,
}

impl AdminService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list_users(
        &self,
        filter: &UserFilter,
        paging: &Paging,
        options: &RequestOptions,
    ) -> ClientResult<ListResponse<AdminUser>> {
        fetch(self.transport.as_ref(), list_users_request(filter, paging)?, options).await
    }
}
