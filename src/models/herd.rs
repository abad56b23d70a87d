//! Herd model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A grouping of animals within a farm
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Herd {
    pub id: i64,
    pub farm_id: i64,
    pub name: String,
    /// Archived herds are excluded from listings and statistics
    pub archived: bool,
    pub created_at: Option<DateTime<Utc>>,
}
