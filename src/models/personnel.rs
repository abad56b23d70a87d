//! Farm personnel model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A worker-to-farm assignment with a worker-type classification.
/// Personnel records carry no archived flag; they are always counted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PersonnelAssignment {
    pub id: i64,
    pub farm_id: i64,
    pub name: String,
    /// Worker classification (e.g. "caretaker", "veterinarian", "milker")
    pub worker_type: String,
    pub created_at: Option<DateTime<Utc>>,
}
