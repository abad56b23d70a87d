//! Animal model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::enums::Sex;

/// Individual livestock record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Animal {
    pub id: i64,
    pub herd_id: i64,
    /// Ear tag or other identification mark
    pub tag: Option<String>,
    pub sex: Sex,
    /// Archived animals are excluded from statistics
    pub archived: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for listing animals
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AnimalQuery {
    /// Restrict to one sex value
    pub sex: Option<Sex>,
}
