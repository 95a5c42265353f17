use std::any::Any;
use std::sync::Arc;

use leavedesk_client::{ClientResult, RequestOptions, Transport};
use leavedesk_module_sdk::StateFacade;
use leavedesk_types::{AllowanceFilter, LeaveAllowance, ListResponse, Paging, UserBalanceResponse};

use super::{mask_of, paging_or_default};
use crate::service::allowance::AllowanceService;

/// Facade over [`AllowanceService`], registered as `hr-allowance`.
#[derive(Clone)]
pub struct HrAllowanceStore {
    service: AllowanceService,
    options: RequestOptions,
}

impl HrAllowanceStore {
    pub const NAME: &'static str = "hr-allowance";

    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            service: AllowanceService::new(transport),
            options: RequestOptions::default(),
        }
    }

    #[must_use]
    pub fn scoped(&self, options: RequestOptions) -> Self {
        Self {
            service: self.service.clone(),
            options,
        }
    }

    pub async fn list_allowances(
        &self,
        paging: Option<&Paging>,
        form: Option<&AllowanceFilter>,
    ) -> ClientResult<ListResponse<LeaveAllowance>> {
        let filter = form.cloned().unwrap_or_default();
        self.service
            .list(&filter, &paging_or_default(paging), &self.options)
            .await
    }

    pub async fn get_allowance(&self, id: &str) -> ClientResult<LeaveAllowance> {
        self.service.get(id, &self.options).await
    }

    pub async fn create_allowance(&self, data: &LeaveAllowance) -> ClientResult<LeaveAllowance> {
        self.service.create(data, &self.options).await
    }

    pub async fn update_allowance(
        &self,
        id: &str,
        data: &LeaveAllowance,
        fields: &[&str],
    ) -> ClientResult<LeaveAllowance> {
        self.service
            .update(id, data, &mask_of(fields), &self.options)
            .await
    }

    pub async fn delete_allowance(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id, &self.options).await
    }

    pub async fn user_balance(
        &self,
        user_id: u32,
        year: Option<i32>,
    ) -> ClientResult<UserBalanceResponse> {
        self.service.user_balance(user_id, year, &self.options).await
    }
}

impl StateFacade for HrAllowanceStore {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
