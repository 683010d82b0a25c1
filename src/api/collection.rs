//! Collection Requests
//!
//! List/create/update/delete for any `Resource`, shared by articles and products.

use serde_json::{Map, Value};

use super::{ApiRequest, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::RecordId;
use crate::resource::{Resource, ResourceKind};

// ========================
// Request Builders
// ========================

pub fn list_request(kind: ResourceKind) -> ApiRequest {
    ApiRequest::get(kind.list_path())
}

pub fn create_request<R: Resource>(draft: &R::Draft) -> ApiResult<ApiRequest> {
    Ok(ApiRequest::post(R::KIND.admin_path(), encode(draft)?))
}

pub fn update_request<R: Resource>(id: RecordId, draft: &R::Draft) -> ApiResult<ApiRequest> {
    Ok(ApiRequest::put(R::KIND.item_path(id), encode(draft)?))
}

pub fn delete_request(kind: ResourceKind, id: RecordId) -> ApiRequest {
    ApiRequest::delete(kind.item_path(id))
}

fn encode<T: serde::Serialize>(draft: &T) -> ApiResult<Value> {
    serde_json::to_value(draft).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Decode `{ "<collection_key>": [ ... ] }` into records.
/// Entries that do not match the record shape are skipped with a warning.
pub fn decode_collection<R: Resource>(body: &str) -> ApiResult<Vec<R>> {
    let key = R::KIND.collection_key();
    let mut envelope: Map<String, Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let Some(Value::Array(entries)) = envelope.remove(key) else {
        return Err(ApiError::Decode(format!("missing `{}` array", key)));
    };

    let records = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<R>(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(kind = %R::KIND, index, error = %err, "skipping malformed record");
                None
            }
        })
        .collect();
    Ok(records)
}

// ========================
// Calls
// ========================

/// GET the full collection
pub async fn list<R: Resource>(transport: &impl Transport) -> ApiResult<Vec<R>> {
    let response = transport.send(list_request(R::KIND)).await?.error_for_status()?;
    decode_collection(&response.body)
}

/// POST a new record; the response body is ignored
pub async fn create<R: Resource>(transport: &impl Transport, draft: &R::Draft) -> ApiResult<()> {
    transport.send(create_request::<R>(draft)?).await?.error_for_status()?;
    Ok(())
}

/// PUT new field values for an existing record
pub async fn update<R: Resource>(
    transport: &impl Transport,
    id: RecordId,
    draft: &R::Draft,
) -> ApiResult<()> {
    transport.send(update_request::<R>(id, draft)?).await?.error_for_status()?;
    Ok(())
}

pub async fn delete<R: Resource>(transport: &impl Transport, id: RecordId) -> ApiResult<()> {
    transport.send(delete_request(R::KIND, id)).await?.error_for_status()?;
    Ok(())
}
