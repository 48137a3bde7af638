//! Legacy (v1) equipment endpoints
//!
//! Deprecated in favour of `/api/alatpertanian`. Ids travel in the `?id=`
//! query string and there is no single-item GET.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::Response,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::Deleted,
        legacy::{LegacyEquipment, LegacyEquipmentPayload, LegacyIdQuery},
    },
    AppState,
};

use super::{JsonBody, LegacyId};

/// RFC 9745 `Deprecation` value: the legacy routes were deprecated on
/// 2024-01-01T00:00:00Z
pub const DEPRECATED_SINCE: &str = "@1704067200";

/// Tag every legacy response as deprecated and point at the successor route
pub async fn mark_deprecated(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert("deprecation", HeaderValue::from_static(DEPRECATED_SINCE));
    headers.insert(
        header::LINK,
        HeaderValue::from_static("</api/alatpertanian>; rel=\"successor-version\""),
    );
    response
}

/// List all equipment in id order
#[utoipa::path(
    get,
    path = "/api/legacy/alatpertanian",
    operation_id = "legacy_list_equipment",
    tag = "legacy",
    responses(
        (status = 200, description = "Equipment list", body = Vec<LegacyEquipment>)
    )
)]
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<Json<Vec<LegacyEquipment>>> {
    let equipment = state.services.legacy.list().await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/api/legacy/alatpertanian",
    operation_id = "legacy_create_equipment",
    tag = "legacy",
    request_body = LegacyEquipmentPayload,
    responses(
        (status = 200, description = "Equipment created", body = LegacyEquipment)
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<LegacyEquipmentPayload>,
) -> AppResult<Json<LegacyEquipment>> {
    let equipment = state.services.legacy.create(&data).await?;
    Ok(Json(equipment))
}

/// Replace equipment; unknown ids are echoed back without creating a row
#[utoipa::path(
    put,
    path = "/api/legacy/alatpertanian",
    operation_id = "legacy_update_equipment",
    tag = "legacy",
    params(LegacyIdQuery),
    request_body = LegacyEquipmentPayload,
    responses(
        (status = 200, description = "Equipment updated", body = LegacyEquipment),
        (status = 400, description = "Missing or invalid id", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    LegacyId(id): LegacyId,
    JsonBody(data): JsonBody<LegacyEquipmentPayload>,
) -> AppResult<Json<LegacyEquipment>> {
    let equipment = state.services.legacy.update(id, data).await?;
    Ok(Json(equipment))
}

/// Delete equipment; succeeds whether or not the row existed
#[utoipa::path(
    delete,
    path = "/api/legacy/alatpertanian",
    operation_id = "legacy_delete_equipment",
    tag = "legacy",
    params(LegacyIdQuery),
    responses(
        (status = 200, description = "Equipment deleted", body = Deleted),
        (status = 400, description = "Missing or invalid id", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    LegacyId(id): LegacyId,
) -> AppResult<Json<Deleted>> {
    state.services.legacy.delete(id).await?;
    Ok(Json(Deleted { deleted: id }))
}
