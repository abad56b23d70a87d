//! Farm model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A managed farm containing herds and personnel
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Farm {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub location: Option<String>,
    /// Archived farms are excluded from listings and statistics
    pub archived: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for listing farms
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct FarmQuery {
    /// Restrict to this owner (admin only; ignored for owner accounts)
    pub owner_id: Option<i64>,
}
