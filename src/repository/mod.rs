//! Repository layer for database operations

pub mod equipment;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::equipment::{Equipment, EquipmentPayload},
};

pub use equipment::PgEquipmentStore;
#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryEquipmentStore;

/// Ordering of list results by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Storage for equipment records.
///
/// Each method is a single statement against the store; nothing here opens
/// a transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// All records ordered by id
    async fn list(&self, order: SortOrder) -> AppResult<Vec<Equipment>>;

    async fn get(&self, id: i32) -> AppResult<Option<Equipment>>;

    /// Insert a record; the store assigns `id`, `created_at` and `updated_at`
    async fn create(&self, data: &EquipmentPayload) -> AppResult<Equipment>;

    /// Overwrite every mutable field and refresh `updated_at`.
    /// Returns `None` when no row has this id.
    async fn update(&self, id: i32, data: &EquipmentPayload) -> AppResult<Option<Equipment>>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding the store handle
#[derive(Clone)]
pub struct Repository {
    pub equipment: Arc<dyn EquipmentStore>,
}

impl Repository {
    /// Create a new repository backed by the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self::with_store(Arc::new(PgEquipmentStore::new(pool)))
    }

    /// Create a repository over any store implementation
    pub fn with_store(store: Arc<dyn EquipmentStore>) -> Self {
        Self { equipment: store }
    }
}
