use std::any::Any;
use std::sync::Arc;

use leavedesk_client::{ClientResult, RequestOptions, Transport};
use leavedesk_module_sdk::StateFacade;
use leavedesk_types::{
    ApproveBody, CalendarEvent, CalendarFilter, LeaveRequest, LeaveRequestFilter, ListResponse,
    Paging, RejectBody,
};

use super::{mask_of, paging_or_default};
use crate::service::leave::LeaveService;

/// Facade over [`LeaveService`], registered as `hr-leave`.
#[derive(Clone)]
pub struct HrLeaveStore {
    service: LeaveService,
    options: RequestOptions,
}

impl HrLeaveStore {
    pub const NAME: &'static str = "hr-leave";

    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            service: LeaveService::new(transport),
            options: RequestOptions::default(),
        }
    }

    /// Copy of this facade whose calls use `options`.
    #[must_use]
    pub fn scoped(&self, options: RequestOptions) -> Self {
        Self {
            service: self.service.clone(),
            options,
        }
    }

    pub async fn list_leave_requests(
        &self,
        paging: Option<&Paging>,
        form: Option<&LeaveRequestFilter>,
    ) -> ClientResult<ListResponse<LeaveRequest>> {
        let filter = form.cloned().unwrap_or_default();
        self.service
            .list(&filter, &paging_or_default(paging), &self.options)
            .await
    }

    pub async fn get_leave_request(&self, id: &str) -> ClientResult<LeaveRequest> {
        self.service.get(id, &self.options).await
    }

    pub async fn create_leave_request(&self, data: &LeaveRequest) -> ClientResult<LeaveRequest> {
        self.service.create(data, &self.options).await
    }

    pub async fn update_leave_request(
        &self,
        id: &str,
        data: &LeaveRequest,
        fields: &[&str],
    ) -> ClientResult<LeaveRequest> {
        self.service
            .update(id, data, &mask_of(fields), &self.options)
            .await
    }

    pub async fn delete_leave_request(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id, &self.options).await
    }

    pub async fn approve_leave_request(
        &self,
        id: &str,
        review_notes: Option<&str>,
        approver_email: Option<&str>,
        approver_name: Option<&str>,
    ) -> ClientResult<LeaveRequest> {
        let body = ApproveBody {
            review_notes: review_notes.map(str::to_string),
            approver_email: approver_email.map(str::to_string),
            approver_name: approver_name.map(str::to_string),
        };
        self.service.approve(id, &body, &self.options).await
    }

    pub async fn reject_leave_request(
        &self,
        id: &str,
        review_notes: Option<&str>,
    ) -> ClientResult<LeaveRequest> {
        let body = RejectBody {
            review_notes: review_notes.map(str::to_string),
        };
        self.service.reject(id, &body, &self.options).await
    }

    pub async fn cancel_leave_request(&self, id: &str) -> ClientResult<LeaveRequest> {
        self.service.cancel(id, &self.options).await
    }

    pub async fn calendar_events(
        &self,
        filter: Option<&CalendarFilter>,
    ) -> ClientResult<Vec<CalendarEvent>> {
        let filter = filter.cloned().unwrap_or_default();
        self.service.calendar_events(&filter, &self.options).await
    }
}

impl StateFacade for HrLeaveStore {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
