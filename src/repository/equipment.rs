//! Equipment repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{EquipmentStore, SortOrder};
use crate::{
    error::AppResult,
    models::equipment::{Equipment, EquipmentPayload},
};

const COLUMNS: &str = "id, photo, name, price_per_week, category, created_at, updated_at";

#[derive(Clone)]
pub struct PgEquipmentStore {
    pool: Pool<Postgres>,
}

impl PgEquipmentStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentStore for PgEquipmentStore {
    async fn list(&self, order: SortOrder) -> AppResult<Vec<Equipment>> {
        let query = format!(
            "SELECT {} FROM alatpertanian ORDER BY id {}",
            COLUMNS,
            order.as_sql()
        );
        let rows = sqlx::query_as::<_, Equipment>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> AppResult<Option<Equipment>> {
        let query = format!("SELECT {} FROM alatpertanian WHERE id = $1", COLUMNS);
        let row = sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, data: &EquipmentPayload) -> AppResult<Equipment> {
        // created_at and updated_at both default to the same NOW()
        let query = format!(
            r#"
            INSERT INTO alatpertanian (photo, name, price_per_week, category)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            COLUMNS
        );
        let row = sqlx::query_as::<_, Equipment>(&query)
            .bind(&data.photo)
            .bind(&data.name)
            .bind(data.price_per_week)
            .bind(&data.category)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, data: &EquipmentPayload) -> AppResult<Option<Equipment>> {
        // NOW() is the transaction start time; GREATEST keeps updated_at
        // strictly increasing even for back-to-back updates.
        let query = format!(
            r#"
            UPDATE alatpertanian
            SET photo = $1, name = $2, price_per_week = $3, category = $4,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $5
            RETURNING {}
            "#,
            COLUMNS
        );
        let row = sqlx::query_as::<_, Equipment>(&query)
            .bind(&data.photo)
            .bind(&data.name)
            .bind(data.price_per_week)
            .bind(&data.category)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM alatpertanian WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
