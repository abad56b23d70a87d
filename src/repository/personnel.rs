//! Farm personnel repository
//!
//! Personnel assignments carry no archived flag, so every counting query
//! here is unconditional apart from the farm scope.

use sqlx::{Pool, Postgres, Row};

use crate::{error::AppResult, models::personnel::PersonnelAssignment};

#[derive(Clone)]
pub struct PersonnelRepository {
    pool: Pool<Postgres>,
}

impl PersonnelRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List personnel assignments for one farm, in primary-key order
    pub async fn list_by_farm(&self, farm_id: i64) -> AppResult<Vec<PersonnelAssignment>> {
        let personnel = sqlx::query_as::<_, PersonnelAssignment>(
            "SELECT * FROM farm_personnel WHERE farm_id = $1 ORDER BY id",
        )
        .bind(farm_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(personnel)
    }

    /// Count personnel assignments for the given farms
    pub async fn count_in_farms(&self, farm_ids: &[i64]) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM farm_personnel WHERE farm_id = ANY($1)")
                .bind(farm_ids)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Count personnel assignments grouped by worker type
    pub async fn count_by_type(&self, farm_ids: &[i64]) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT worker_type, COUNT(*) as personnel_count
            FROM farm_personnel
            WHERE farm_id = ANY($1)
            GROUP BY worker_type
            ORDER BY personnel_count DESC
            "#,
        )
        .bind(farm_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.get("worker_type"), row.get("personnel_count")))
        .collect();

        Ok(rows)
    }

    /// Count personnel assignments grouped by farm
    pub async fn count_by_farm(&self, farm_ids: &[i64]) -> AppResult<Vec<(i64, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT farm_id, COUNT(*) as personnel_count
            FROM farm_personnel
            WHERE farm_id = ANY($1)
            GROUP BY farm_id
            "#,
        )
        .bind(farm_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.get("farm_id"), row.get("personnel_count")))
        .collect();

        Ok(rows)
    }
}
