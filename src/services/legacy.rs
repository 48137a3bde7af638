//! Legacy (v1) equipment service
//!
//! Keeps the first endpoint's behaviour: no required-field checks, updates
//! and deletes of unknown ids succeed without touching any row.

use crate::{
    error::AppResult,
    models::{
        equipment::EquipmentPayload,
        legacy::{LegacyEquipment, LegacyEquipmentPayload},
    },
    repository::{Repository, SortOrder},
};

#[derive(Clone)]
pub struct LegacyEquipmentService {
    repository: Repository,
}

impl LegacyEquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All equipment in id order
    pub async fn list(&self) -> AppResult<Vec<LegacyEquipment>> {
        let rows = self.repository.equipment.list(SortOrder::Ascending).await?;
        Ok(rows.into_iter().map(LegacyEquipment::from).collect())
    }

    pub async fn create(&self, data: &LegacyEquipmentPayload) -> AppResult<LegacyEquipment> {
        let row = self
            .repository
            .equipment
            .create(&EquipmentPayload::from(data))
            .await?;
        Ok(row.into())
    }

    /// Replace a record. An unknown id is not an error; the submitted values
    /// are echoed back under that id.
    pub async fn update(&self, id: i32, data: LegacyEquipmentPayload) -> AppResult<LegacyEquipment> {
        match self
            .repository
            .equipment
            .update(id, &EquipmentPayload::from(&data))
            .await?
        {
            Some(row) => Ok(row.into()),
            None => {
                tracing::debug!(id, "Legacy update matched no rows");
                Ok(data.echo(id))
            }
        }
    }

    /// Delete a record whether or not it exists
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let removed = self.repository.equipment.delete(id).await?;
        if !removed {
            tracing::debug!(id, "Legacy delete matched no rows");
        }
        Ok(())
    }
}
