//! Reporting endpoints

use axum::{extract::Query, extract::State, Json};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Query parameters for the farm statistics report
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct FarmStatisticsQuery {
    /// Owner to report on (admins only; ignored for owner accounts)
    pub owner_id: Option<i64>,
    /// Restrict the report to a single farm
    pub farm_id: Option<i64>,
}

/// Consolidated totals across the farm scope
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsSummary {
    pub total_farms: i64,
    pub total_herds: i64,
    pub total_animals: i64,
    pub total_personnel: i64,
}

/// Per-farm statistics row
#[derive(Debug, Serialize, ToSchema)]
pub struct FarmStatsDetail {
    pub farm_id: i64,
    pub name: String,
    /// Active herds on this farm
    pub herd_count: i64,
    /// Active animals on this farm (through active herds)
    pub animal_count: i64,
    /// Personnel assigned to this farm
    pub personnel_count: i64,
}

/// Per-herd statistics row
#[derive(Debug, Serialize, ToSchema)]
pub struct HerdStatsDetail {
    pub herd_id: i64,
    pub farm_id: i64,
    pub name: String,
    /// Active animals in this herd
    pub animal_count: i64,
}

/// Farm statistics report body
#[derive(Debug, Serialize, ToSchema)]
pub struct FarmStatistics {
    pub summary: StatsSummary,
    /// Active animal counts keyed by sex value
    pub animals_by_sex: IndexMap<String, i64>,
    /// Personnel counts keyed by worker type
    pub personnel_by_type: IndexMap<String, i64>,
    pub farms: Vec<FarmStatsDetail>,
    pub herds: Vec<HerdStatsDetail>,
}

/// Response envelope for the farm statistics report
#[derive(Debug, Serialize, ToSchema)]
pub struct FarmStatisticsResponse {
    pub success: bool,
    pub message: String,
    pub data: FarmStatistics,
}

/// Get consolidated farm statistics
///
/// Admins may report on any owner (or all owners) via `owner_id`; owner
/// accounts are always scoped to their own farms.
#[utoipa::path(
    get,
    path = "/reports/farm-statistics",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(FarmStatisticsQuery),
    responses(
        (status = 200, description = "Farm statistics", body = FarmStatisticsResponse),
        (status = 403, description = "Caller has no owner account"),
        (status = 404, description = "Owner or farms not found")
    )
)]
pub async fn get_farm_statistics(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<FarmStatisticsQuery>,
) -> AppResult<Json<FarmStatisticsResponse>> {
    let statistics = state
        .services
        .reports
        .farm_statistics(&claims, query.owner_id, query.farm_id)
        .await?;

    Ok(Json(FarmStatisticsResponse {
        success: true,
        message: "Farm statistics".to_string(),
        data: statistics,
    }))
}
