//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment listing as stored in the `alatpertanian` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Photo URL or file name
    pub photo: String,
    pub name: String,
    /// Rental price for one week
    pub price_per_week: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create or replace equipment request.
///
/// Absent fields fall back to their zero value; `photo` and `name` are then
/// rejected by validation if empty. Timestamps and `id` are never read from
/// the body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct EquipmentPayload {
    #[validate(length(min = 1))]
    pub photo: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub price_per_week: f64,
    pub category: String,
}

/// Body returned by delete endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Deleted {
    pub deleted: i32,
}
