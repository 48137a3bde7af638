//! In-memory equipment store
//!
//! Mirrors the PostgreSQL store's semantics (serial ids, timestamps, hard
//! deletes) without a database. Only built for tests or with the
//! `test-util` feature.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use super::{EquipmentStore, SortOrder};
use crate::{
    error::AppResult,
    models::equipment::{Equipment, EquipmentPayload},
};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Equipment>,
}

#[derive(Default)]
pub struct MemoryEquipmentStore {
    table: RwLock<Table>,
}

impl MemoryEquipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EquipmentStore for MemoryEquipmentStore {
    async fn list(&self, order: SortOrder) -> AppResult<Vec<Equipment>> {
        let table = self.table.read().await;
        let rows = table.rows.values().cloned();
        Ok(match order {
            SortOrder::Ascending => rows.collect(),
            SortOrder::Descending => rows.rev().collect(),
        })
    }

    async fn get(&self, id: i32) -> AppResult<Option<Equipment>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, data: &EquipmentPayload) -> AppResult<Equipment> {
        let mut table = self.table.write().await;
        // ids are never reused, like a SERIAL column
        table.last_id += 1;
        let now = Utc::now();
        let row = Equipment {
            id: table.last_id,
            photo: data.photo.clone(),
            name: data.name.clone(),
            price_per_week: data.price_per_week,
            category: data.category.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, data: &EquipmentPayload) -> AppResult<Option<Equipment>> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.photo = data.photo.clone();
        row.name = data.name.clone();
        row.price_per_week = data.price_per_week;
        row.category = data.category.clone();
        row.updated_at = Utc::now().max(row.updated_at + Duration::microseconds(1));
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
