//! Legacy (v1) equipment shape
//!
//! The first version of the endpoint exposed an integer `price` and a
//! `photo_url` field and had no timestamps. It is served from the same table
//! as [`Equipment`]; these types project rows into that older shape.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::equipment::{Equipment, EquipmentPayload};
use crate::error::{AppError, AppResult};

/// Equipment record in the legacy shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LegacyEquipment {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub category: String,
    pub photo_url: String,
}

/// Legacy create/replace request. Accepts the historical field names too.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct LegacyEquipmentPayload {
    #[serde(alias = "nama")]
    pub name: String,
    #[serde(alias = "harga")]
    pub price: i64,
    #[serde(alias = "kategori")]
    pub category: String,
    #[serde(alias = "fotourl")]
    pub photo_url: String,
}

/// `?id=` query parameter of the legacy update and delete routes
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LegacyIdQuery {
    /// Equipment ID
    pub id: Option<String>,
}

impl LegacyIdQuery {
    pub fn parse(&self) -> AppResult<i32> {
        let raw = self
            .id
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Missing id query parameter".to_string()))?;
        raw.trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", raw)))
    }
}

impl From<Equipment> for LegacyEquipment {
    fn from(e: Equipment) -> Self {
        Self {
            id: e.id,
            name: e.name,
            price: e.price_per_week.round() as i64,
            category: e.category,
            photo_url: e.photo,
        }
    }
}

impl From<&LegacyEquipmentPayload> for EquipmentPayload {
    fn from(p: &LegacyEquipmentPayload) -> Self {
        Self {
            photo: p.photo_url.clone(),
            name: p.name.clone(),
            price_per_week: p.price as f64,
            category: p.category.clone(),
        }
    }
}

impl LegacyEquipmentPayload {
    /// Echo the submitted values back under `id`, as the legacy update does
    /// when no row matched.
    pub fn echo(self, id: i32) -> LegacyEquipment {
        LegacyEquipment {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            photo_url: self.photo_url,
        }
    }
}
