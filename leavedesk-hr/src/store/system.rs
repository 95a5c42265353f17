use std::any::Any;
use std::sync::Arc;

use leavedesk_client::{ClientResult, RequestOptions, Transport};
use leavedesk_module_sdk::StateFacade;
use leavedesk_types::{AdminUser, HealthStatus, HrStats, ListResponse, Paging, UserFilter};

use super::paging_or_default;
use crate::service::admin::AdminService;
use crate::service::system::SystemService;

/// Facade over [`SystemService`] and the admin user lookup, registered as
/// `hr-system`.
#[derive(Clone)]
pub struct HrSystemStore {
    system: SystemService,
    admin: AdminService,
    options: RequestOptions,
}

impl HrSystemStore {
    pub const NAME: &'static str = "hr-system";

    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            system: SystemService::new(transport.clone()),
            admin: AdminService::new(transport),
            options: RequestOptions::default(),
        }
    }

    #[must_use]
    pub fn scoped(&self, options: RequestOptions) -> Self {
        Self {
            system: self.system.clone(),
            admin: self.admin.clone(),
            options,
        }
    }

    pub async fn stats(&self) -> ClientResult<HrStats> {
        self.system.stats(&self.options).await
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.system.health(&self.options).await
    }

    /// User picker lookup for request and allowance forms.
    pub async fn list_users(
        &self,
        paging: Option<&Paging>,
        form: Option<&UserFilter>,
    ) -> ClientResult<ListResponse<AdminUser>> {
        let filter = form.cloned().unwrap_or_default();
        self.admin
            .list_users(&filter, &paging_or_default(paging), &self.options)
            .await
    }
}

impl StateFacade for HrSystemStore {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
