//! Leave allowances (`/allowances`) and per-user balances.

use std::sync::Arc;

use leavedesk_client::{ApiRequest, ClientResult, RequestOptions, Transport};
use leavedesk_types::{
    AllowanceEnvelope, AllowanceFilter, FieldMask, LeaveAllowance, ListResponse, Paging,
    UserBalanceResponse,
};
use serde::Serialize;

use super::{execute, fetch, fetch_record, item_path, update_request};

pub const COLLECTION: &str = "/allowances";
const ENTITY: &str = "allowance";

#[derive(Serialize)]
struct BalanceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

pub fn list_request(filter: &AllowanceFilter, paging: &Paging) -> ClientResult<ApiRequest> {
    ApiRequest::get(COLLECTION).with_query(filter)?.with_query(paging)
}

pub fn get_request(id: &str) -> ApiRequest {
    ApiRequest::get(item_path(COLLECTION, id))
}

pub fn create_request(data: &LeaveAllowance) -> ClientResult<ApiRequest> {
    ApiRequest::post(COLLECTION).with_json(data)
}

pub fn update_request_for(
    id: &str,
    data: &LeaveAllowance,
    mask: &FieldMask,
) -> ClientResult<ApiRequest> {
    update_request(COLLECTION, id, data, mask)
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(item_path(COLLECTION, id))
}

/// `GET /users/{userId}/balance`; a zero year is treated as absent.
pub fn user_balance_request(user_id: u32, year: Option<i32>) -> ClientResult<ApiRequest> {
    let query = BalanceQuery {
        year: year.filter(|y| *y != 0),
    };
    ApiRequest::get(format!("/users/{user_id}/balance")).with_query(&query)
}

#[derive(Clone)]
pub struct AllowanceService {
    transport: Arc<dyn Transport>,
}

impl AllowanceService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        filter: &AllowanceFilter,
        paging: &Paging,
        options: &RequestOptions,
    ) -> ClientResult<ListResponse<LeaveAllowance>> {
        fetch(self.transport.as_ref(), list_request(filter, paging)?, options).await
    }

    pub async fn get(&self, id: &str, options: &RequestOptions) -> ClientResult<LeaveAllowance> {
        let envelope: AllowanceEnvelope =
            fetch_record(self.transport.as_ref(), get_request(id), options, ENTITY, id).await?;
        Ok(envelope.allowance)
    }

    pub async fn create(
        &self,
        data: &LeaveAllowance,
        options: &RequestOptions,
    ) -> ClientResult<LeaveAllowance> {
        let envelope: AllowanceEnvelope =
            fetch(self.transport.as_ref(), create_request(data)?, options).await?;
        Ok(envelope.allowance)
    }

    pub async fn update(
        &self,
        id: &str,
        data: &LeaveAllowance,
        mask: &FieldMask,
        options: &RequestOptions,
    ) -> ClientResult<LeaveAllowance> {
        let envelope: AllowanceEnvelope =
            fetch(self.transport.as_ref(), update_request_for(id, data, mask)?, options).await?;
        Ok(envelope.allowance)
    }

    pub async fn delete(&self, id: &str, options: &RequestOptions) -> ClientResult<()> {
        execute(self.transport.as_ref(), delete_request(id), options).await
    }

    pub async fn user_balance(
        &self,
        user_id: u32,
        year: Option<i32>,
        options: &RequestOptions,
    ) -> ClientResult<UserBalanceResponse> {
        fetch(self.transport.as_ref(), user_balance_request(user_id, year)?, options).await
    }
}
