//! API handlers for the equipment REST endpoints

pub mod equipment;
pub mod health;
pub mod legacy;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    middleware,
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::legacy::LegacyIdQuery, AppState};

/// JSON request body.
///
/// Unlike `axum::Json` this does not insist on a `Content-Type` header, and
/// a body that fails to decode is a 400 with the usual error shape.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    }
}

/// Numeric equipment id taken from the `{id}` path segment
pub struct EquipmentId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EquipmentId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse()
            .map(EquipmentId)
            .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", raw)))
    }
}

/// Numeric equipment id taken from the legacy `?id=` query parameter
pub struct LegacyId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for LegacyId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<LegacyIdQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        query.parse().map(LegacyId)
    }
}

/// Fallback for paths (and methods on canonical paths) with no handler
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Fallback for unsupported methods on the legacy path
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let canonical = Router::new()
        .route(
            "/api/alatpertanian",
            get(equipment::list_equipment)
                .post(equipment::create_equipment)
                .fallback(route_not_found),
        )
        .route(
            "/api/alatpertanian/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment)
                .fallback(route_not_found),
        );

    let legacy = Router::new()
        .route(
            "/api/legacy/alatpertanian",
            get(legacy::list_equipment)
                .post(legacy::create_equipment)
                .put(legacy::update_equipment)
                .delete(legacy::delete_equipment)
                .fallback(method_not_allowed),
        )
        .route_layer(middleware::map_response(legacy::mark_deprecated));

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .merge(canonical)
        .merge(legacy)
        .fallback(route_not_found)
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    api.merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
