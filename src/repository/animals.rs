//! Animals repository

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::AppResult,
    models::{animal::Animal, enums::Sex},
};

#[derive(Clone)]
pub struct AnimalsRepository {
    pool: Pool<Postgres>,
}

impl AnimalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active animals on a farm through its active herds,
    /// optionally restricted to one sex, in primary-key order.
    pub async fn list_active_in_farm(
        &self,
        farm_id: i64,
        sex: Option<Sex>,
    ) -> AppResult<Vec<Animal>> {
        let animals = sqlx::query_as::<_, Animal>(
            r#"
            SELECT a.* FROM animals a
            JOIN herds h ON a.herd_id = h.id
            WHERE h.farm_id = $1
              AND a.archived = FALSE
              AND h.archived = FALSE
              AND ($2::TEXT IS NULL OR a.sex = $2)
            ORDER BY a.id
            "#,
        )
        .bind(farm_id)
        .bind(sex)
        .fetch_all(&self.pool)
        .await?;

        Ok(animals)
    }

    /// Count active animals belonging to the given herds
    pub async fn count_active_in_herds(&self, herd_ids: &[i64]) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM animals WHERE archived = FALSE AND herd_id = ANY($1)",
        )
        .bind(herd_ids)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Count active animals grouped by sex
    pub async fn count_active_by_sex(&self, herd_ids: &[i64]) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT sex, COUNT(*) as animal_count
            FROM animals
            WHERE archived = FALSE AND herd_id = ANY($1)
            GROUP BY sex
            ORDER BY animal_count DESC
            "#,
        )
        .bind(herd_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.get("sex"), row.get("animal_count")))
        .collect();

        Ok(rows)
    }

    /// Count active animals grouped by herd
    pub async fn count_active_by_herd(&self, herd_ids: &[i64]) -> AppResult<Vec<(i64, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT herd_id, COUNT(*) as animal_count
            FROM animals
            WHERE archived = FALSE AND herd_id = ANY($1)
            GROUP BY herd_id
            "#,
        )
        .bind(herd_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.get("herd_id"), row.get("animal_count")))
        .collect();

        Ok(rows)
    }

    /// Count active animals grouped by farm, joining through herds.
    /// Both the animal and its herd must be non-archived.
    pub async fn count_active_by_farm(&self, farm_ids: &[i64]) -> AppResult<Vec<(i64, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT h.farm_id, COUNT(*) as animal_count
            FROM animals a
            JOIN herds h ON a.herd_id = h.id
            WHERE h.farm_id = ANY($1)
              AND a.archived = FALSE
              AND h.archived = FALSE
            GROUP BY h.farm_id
            "#,
        )
        .bind(farm_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| (row.get("farm_id"), row.get("animal_count")))
        .collect();

        Ok(rows)
    }
}
