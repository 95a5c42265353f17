use std::any::Any;
use std::sync::Arc;

use leavedesk_client::{ClientResult, RequestOptions, Transport};
use leavedesk_module_sdk::StateFacade;
use leavedesk_types::{AbsenceType, AbsenceTypeFilter, ListResponse, Paging};

use super::{mask_of, paging_or_default};
use crate::service::absence_type::AbsenceTypeService;

/// Facade over [`AbsenceTypeService`], registered as `hr-absence-type`.
#[derive(Clone)]
pub struct HrAbsenceTypeStore {
    service: AbsenceTypeService,
    options: RequestOptions,
}

impl HrAbsenceTypeStore {
    pub const NAME: &'static str = "hr-absence-type";

    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            service: AbsenceTypeService::new(transport),
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

    pub async fn list_absence_types(
        &self,
        paging: Option<&Paging>,
        form: Option<&AbsenceTypeFilter>,
    ) -> ClientResult<ListResponse<AbsenceType>> {
        let filter = form.cloned().unwrap_or_default();
        self.service
            .list(&filter, &paging_or_default(paging), &self.options)
            .await
    }

    pub async fn get_absence_type(&self, id: &str) -> ClientResult<AbsenceType> {
        self.service.get(id, &self.options).await
    }

    pub async fn create_absence_type(&self, data: &AbsenceType) -> ClientResult<AbsenceType> {
        self.service.create(data, &self.options).await
    }

    pub async fn update_absence_type(
        &self,
        id: &str,
        data: &AbsenceType,
        fields: &[&str],
    ) -> ClientResult<AbsenceType> {
        self.service
            .update(id, data, &mask_of(fields), &self.options)
            .await
    }

    pub async fn delete_absence_type(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id, &self.options).await
    }
}

impl StateFacade for HrAbsenceTypeStore {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
