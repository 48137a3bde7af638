//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, EquipmentPayload},
    repository::{Repository, SortOrder},
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Equipment {} not found", id))
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All equipment, newest first
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list(SortOrder::Descending).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository
            .equipment
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, data: &EquipmentPayload) -> AppResult<Equipment> {
        data.validate()?;
        let equipment = self.repository.equipment.create(data).await?;
        tracing::debug!(id = equipment.id, "Equipment created");
        Ok(equipment)
    }

    pub async fn update(&self, id: i32, data: &EquipmentPayload) -> AppResult<Equipment> {
        data.validate()?;
        self.repository
            .equipment
            .update(id, data)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.equipment.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::debug!(id, "Equipment deleted");
        Ok(())
    }

    /// Readiness probe for the backing store
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.equipment.ping().await
    }
}
