//! Equipment API endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::equipment::{Deleted, Equipment, EquipmentPayload},
    AppState,
};

use super::{EquipmentId, JsonBody};

/// List all equipment, newest first
#[utoipa::path(
    get,
    path = "/api/alatpertanian",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/api/alatpertanian/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 400, description = "Non-numeric id", body = crate::error::ErrorResponse),
        (status = 404, description = "No such equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    EquipmentId(id): EquipmentId,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/api/alatpertanian",
    tag = "equipment",
    request_body = EquipmentPayload,
    responses(
        (status = 200, description = "Equipment created", body = Equipment),
        (status = 400, description = "Missing photo or name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<EquipmentPayload>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok(Json(equipment))
}

/// Replace equipment
#[utoipa::path(
    put,
    path = "/api/alatpertanian/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = EquipmentPayload,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 400, description = "Invalid id or body", body = crate::error::ErrorResponse),
        (status = 404, description = "No such equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    EquipmentId(id): EquipmentId,
    JsonBody(data): JsonBody<EquipmentPayload>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/api/alatpertanian/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = Deleted),
        (status = 404, description = "No such equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    EquipmentId(id): EquipmentId,
) -> AppResult<Json<Deleted>> {
    state.services.equipment.delete(id).await?;
    Ok(Json(Deleted { deleted: id }))
}
