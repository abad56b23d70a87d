//! Owner model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Owner account holding one or more farms
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Owner {
    pub id: i64,
    /// User account this owner is associated with
    pub user_id: i64,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}
