//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, legacy};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alat Pertanian API",
        version = "1.0.0",
        description = "Agricultural equipment listing REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Legacy
        legacy::list_equipment,
        legacy::create_equipment,
        legacy::update_equipment,
        legacy::delete_equipment,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentPayload,
            crate::models::equipment::Deleted,
            // Legacy
            crate::models::legacy::LegacyEquipment,
            crate::models::legacy::LegacyEquipmentPayload,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment listings"),
        (name = "legacy", description = "Deprecated v1 equipment endpoints")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
