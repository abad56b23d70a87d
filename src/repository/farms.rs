//! Farms repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::farm::Farm};

#[derive(Clone)]
pub struct FarmsRepository {
    pool: Pool<Postgres>,
}

impl FarmsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active (non-archived) farms, optionally scoped to one owner
    /// and/or one farm id. Rows come back in primary-key order.
    pub async fn list_active(
        &self,
        owner_id: Option<i64>,
        farm_id: Option<i64>,
    ) -> AppResult<Vec<Farm>> {
        let farms = sqlx::query_as::<_, Farm>(
            r#"
            SELECT * FROM farms
            WHERE archived = FALSE
              AND ($1::BIGINT IS NULL OR owner_id = $1)
              AND ($2::BIGINT IS NULL OR id = $2)
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .bind(farm_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(farms)
    }

    /// Get a farm by ID (archived included; callers decide visibility)
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Farm>> {
        let farm = sqlx::query_as::<_, Farm>("SELECT * FROM farms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(farm)
    }
}
