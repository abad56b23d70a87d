//! Herds repository

use sqlx::{Pool, Postgres, Row};

use crate::{error::AppResult, models::herd::Herd};

#[derive(Clone)]
pub struct HerdsRepository {
    pool: Pool<Postgres>,
}

impl HerdsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active (non-archived) herds belonging to the given farms,
    /// in primary-key order.
    pub async fn list_active_in_farms(&self, farm_ids: &[i64]) -> AppResult<Vec<Herd>> {
        let herds = sqlx::query_as::<_, Herd>(
            r#"
            SELECT * FROM herds
            WHERE archived = FALSE AND farm_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(farm_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(herds)
    }

    /// Count active herds grouped by farm
    pub async fn count_active_by_farm(&self, farm_ids: &[i64]) -> AppResult<Vec<(i64, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT farm_id, COUNT(*) as herd_count
            FROM herds
            WHERE archived = FALSE AND farm_id = ANY($1)
            GROUP BY farm_id
            "#,
        )
        .bind(farm_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.get("farm_id"), row.get("herd_count")))
        .collect();

        Ok(rows)
    }
}
