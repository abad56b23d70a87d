//! Owners repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::owner::Owner};

#[derive(Clone)]
pub struct OwnersRepository {
    pool: Pool<Postgres>,
}

impl OwnersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get owner by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Owner>> {
        let owner = sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner)
    }

    /// Get the owner associated with a user account, if any
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Option<Owner>> {
        let owner = sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner)
    }
}
