//! Leave requests (`/leave-requests`), their review actions and the team
//! calendar.
//!
//! Date-only values in filters and payloads are widened to midnight-UTC
//! timestamps before they leave the client.

use std::sync::Arc;

use leavedesk_client::{ApiRequest, ClientResult, RequestOptions, Transport};
use leavedesk_types::{
    ApproveBody, CalendarEvent, CalendarEventsResponse, CalendarFilter, FieldMask, LeaveRequest,
    LeaveRequestEnvelope, LeaveRequestFilter, ListResponse, Paging, RejectBody,
};

use super::{execute, fetch, fetch_record, item_path, update_request};

pub const COLLECTION: &str = "/leave-requests";
pub const CALENDAR: &str = "/calendar";
const ENTITY: &str = "leave request";

/// Review transitions exposed as `POST /leave-requests/{id}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
    Cancel,
}

impl ReviewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
            ReviewAction::Cancel => "cancel",
        }
    }
}

fn normalized(data: &LeaveRequest) -> LeaveRequest {
    let mut data = data.clone();
    data.normalize_dates();
    data
}

fn action_path(id: &str, action: ReviewAction) -> String {
    format!("{}/{}", item_path(COLLECTION, id), action.as_str())
}

pub fn list_request(filter: &LeaveRequestFilter, paging: &Paging) -> ClientResult<ApiRequest> {
    ApiRequest::get(COLLECTION)
        .with_query(&filter.normalized())?
        .with_query(paging)
}

pub fn get_request(id: &str) -> ApiRequest {
    ApiRequest::get(item_path(COLLECTION, id))
}

pub fn create_request(data: &LeaveRequest) -> ClientResult<ApiRequest> {
    ApiRequest::post(COLLECTION).with_json(&normalized(data))
}

pub fn update_request_for(id: &str, data: &LeaveRequest, mask: &FieldMask) -> ClientResult<ApiRequest> {
    update_request(COLLECTION, id, &normalized(data), mask)
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(item_path(COLLECTION, id))
}

pub fn approve_request(id: &str, body: &ApproveBody) -> ClientResult<ApiRequest> {
    ApiRequest::post(action_path(id, ReviewAction::Approve)).with_json(body)
}

pub fn reject_request(id: &str, body: &RejectBody) -> ClientResult<ApiRequest> {
    ApiRequest::post(action_path(id, ReviewAction::Reject)).with_json(body)
}

/// Cancellation carries no body.
pub fn cancel_request(id: &str) -> ApiRequest {
    ApiRequest::post(action_path(id, ReviewAction::Cancel))
}

pub fn calendar_request(filter: &CalendarFilter) -> ClientResult<ApiRequest> {
    ApiRequest::get(CALENDAR).with_query(&filter.normalized())
}

#[derive(Clone)]
pub struct LeaveService {
    transport: Arc<dyn Transport>,
}

impl LeaveService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        filter: &LeaveRequestFilter,
        paging: &Paging,
        options: &RequestOptions,
    ) -> ClientResult<ListResponse<LeaveRequest>> {
        fetch(self.transport.as_ref(), list_request(filter, paging)?, options).await
    }

    pub async fn get(&self, id: &str, options: &RequestOptions) -> ClientResult<LeaveRequest> {
        let envelope: LeaveRequestEnvelope =
            fetch_record(self.transport.as_ref(), get_request(id), options, ENTITY, id).await?;
        Ok(envelope.leave_request)
    }

    pub async fn create(&self, data: &LeaveRequest, options: &RequestOptions) -> ClientResult<LeaveRequest> {
        self.expect_record(create_request(data)?, options).await
    }

    pub async fn update(
        &self,
        id: &str,
        data: &LeaveRequest,
        mask: &FieldMask,
        options: &RequestOptions,
    ) -> ClientResult<LeaveRequest> {
        self.expect_record(update_request_for(id, data, mask)?, options).await
    }

    pub async fn delete(&self, id: &str, options: &RequestOptions) -> ClientResult<()> {
        execute(self.transport.as_ref(), delete_request(id), options).await
    }

    pub async fn approve(
        &self,
        id: &str,
        body: &ApproveBody,
        options: &RequestOptions,
    ) -> ClientResult<LeaveRequest> {
        self.expect_record(approve_request(id, body)?, options).await
    }

    pub async fn reject(
        &self,
        id: &str,
        body: &RejectBody,
        options: &RequestOptions,
    ) -> ClientResult<LeaveRequest> {
        self.expect_record(reject_request(id, body)?, options).await
    }

    pub async fn cancel(&self, id: &str, options: &RequestOptions) -> ClientResult<LeaveRequest> {
        self.expect_record(cancel_request(id), options).await
    }

    pub async fn calendar_events(
        &self,
        filter: &CalendarFilter,
        options: &RequestOptions,
    ) -> ClientResult<Vec<CalendarEvent>> {
        let response: CalendarEventsResponse =
            fetch(self.transport.as_ref(), calendar_request(filter)?, options).await?;
        Ok(response.events)
    }

    async fn expect_record(&self, request: ApiRequest, options: &RequestOptions) -> ClientResult<LeaveRequest> {
        let envelope: LeaveRequestEnvelope = fetch(self.transport.as_ref(), request, options).await?;
        Ok(envelope.leave_request)
    }
}
