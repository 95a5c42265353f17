//! Absence types (`/absence-types`).

use std::sync::Arc;

use leavedesk_client::{ApiRequest, ClientResult, RequestOptions, Transport};
use leavedesk_types::{
    AbsenceType, AbsenceTypeEnvelope, AbsenceTypeFilter, FieldMask, ListResponse, Paging,
};

use super::{execute, fetch, fetch_record, item_path, update_request};

pub const COLLECTION: &str = "/absence-types";
const ENTITY: &str = "absence type";

pub fn list_request(filter: &AbsenceTypeFilter, paging: &Paging) -> ClientResult<ApiRequest> {
    ApiRequest::get(COLLECTION).with_query(filter)?.with_query(paging)
}

pub fn get_request(id: &str) -> ApiRequest {
    ApiRequest::get(item_path(COLLECTION, id))
}

pub fn create_request(data: &AbsenceType) -> ClientResult<ApiRequest> {
    ApiRequest::post(COLLECTION).with_json(data)
}

pub fn update_request_for(id: &str, data: &AbsenceType, mask: &FieldMask) -> ClientResult<ApiRequest> {
    update_request(COLLECTION, id, data, mask)
}

pub fn delete_request(id: &str) -> ApiRequest {
    ApiRequest::delete(item_path(COLLECTION, id))
}

#[derive(Clone)]
pub struct AbsenceTypeService {
    transport: Arc<dyn Transport>,
}

impl AbsenceTypeService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        filter: &AbsenceTypeFilter,
        paging: &Paging,
        options: &RequestOptions,
    ) -> ClientResult<ListResponse<AbsenceType>> {
        fetch(self.transport.as_ref(), list_request(filter, paging)?, options).await
    }

    pub async fn get(&self, id: &str, options: &RequestOptions) -> ClientResult<AbsenceType> {
        let envelope: AbsenceTypeEnvelope =
            fetch_record(self.transport.as_ref(), get_request(id), options, ENTITY, id).await?;
        Ok(envelope.absence_type)
    }

    pub async fn create(&self, data: &AbsenceType, options: &RequestOptions) -> ClientResult<AbsenceType> {
        let envelope: AbsenceTypeEnvelope =
            fetch(self.transport.as_ref(), create_request(data)?, options).await?;
        Ok(envelope.absence_type)
    }

    pub async fn update(
        &self,
        id: &str,
        data: &AbsenceType,
        mask: &FieldMask,
        options: &RequestOptions,
    ) -> ClientResult<AbsenceType> {
        let envelope: AbsenceTypeEnvelope =
            fetch(self.transport.as_ref(), update_request_for(id, data, mask)?, options).await?;
        Ok(envelope.absence_type)
    }

    pub async fn delete(&self, id: &str, options: &RequestOptions) -> ClientResult<()> {
        execute(self.transport.as_ref(), delete_request(id), options).await
    }
}
