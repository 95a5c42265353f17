//! Entity service layer.
//!
//! Each entity family gets a set of pure request builders (`*_request`
//! functions returning an [`ApiRequest`]) and a service struct that runs
//! them over an injected [`Transport`]. Services hold no state beyond the
//! transport handle, never retry and never swallow errors.

pub mod absence_type;
pub mod admin;
pub mod allowance;
pub mod leave;
pub mod system;

use leavedesk_client::{ApiRequest, ClientResult, RequestOptions, Transport, decode};
use leavedesk_types::{FieldMask, UpdateBody};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// `{collection}/{id}` with the id percent-encoded as one segment.
pub(crate) fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", ApiRequest::segment(id))
}

/// `PUT {collection}/{id}` carrying `{id, data, updateMask}`.
///
/// The mask is sent as given. Entries that name fields absent from `data`
/// are only reported at debug level; the server owns that contract.
pub(crate) fn update_request<T: Serialize>(
    collection: &str,
    id: &str,
    data: &T,
    mask: &FieldMask,
) -> ClientResult<ApiRequest> {
    match mask.missing_from(data) {
        Ok(missing) if !missing.is_empty() => {
            debug!("Update mask for {}/{} names fields not in payload: {:?}", collection, id, missing);
        }
        Ok(_) => {}
        Err(e) => debug!("Could not inspect update payload for {}/{}: {}", collection, id, e),
    }
    ApiRequest::put(item_path(collection, id)).with_json(&UpdateBody {
        id,
        data,
        update_mask: mask.join(),
    })
}

pub(crate) async fn fetch<R: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
    options: &RequestOptions,
) -> ClientResult<R> {
    let value = transport.execute(request, options).await?;
    decode(value)
}

/// Like [`fetch`], but a 404 becomes `NotFound { entity, id }`.
pub(crate) async fn fetch_record<R: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
    options: &RequestOptions,
    entity: &'static str,
    id: &str,
) -> ClientResult<R> {
    fetch(transport, request, options)
        .await
        .map_err(|e| e.into_not_found(entity, id))
}

/// Runs a request whose response body is irrelevant.
pub(crate) async fn execute(
    transport: &dyn Transport,
    request: ApiRequest,
    options: &RequestOptions,
) -> ClientResult<()> {
    transport.execute(request, options).await.map(|_| ())
}
