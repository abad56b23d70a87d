//! Farm browsing endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        animal::{Animal, AnimalQuery},
        farm::{Farm, FarmQuery},
        herd::Herd,
        personnel::PersonnelAssignment,
    },
};

use super::AuthenticatedUser;

/// List farms visible to the caller
#[utoipa::path(
    get,
    path = "/farms",
    tag = "farms",
    security(("bearer_auth" = [])),
    params(FarmQuery),
    responses(
        (status = 200, description = "Farms list", body = Vec<Farm>),
        (status = 403, description = "Caller has no owner account")
    )
)]
pub async fn list_farms(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<FarmQuery>,
) -> AppResult<Json<Vec<Farm>>> {
    let farms = state
        .services
        .farms
        .list_farms(&claims, query.owner_id)
        .await?;
    Ok(Json(farms))
}

/// Get one farm
#[utoipa::path(
    get,
    path = "/farms/{id}",
    tag = "farms",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Farm ID")),
    responses(
        (status = 200, description = "Farm", body = Farm),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn get_farm(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Farm>> {
    let farm = state.services.farms.get_farm(&claims, id).await?;
    Ok(Json(farm))
}

/// List active herds of one farm
#[utoipa::path(
    get,
    path = "/farms/{id}/herds",
    tag = "farms",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Farm ID")),
    responses(
        (status = 200, description = "Herds list", body = Vec<Herd>),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn list_farm_herds(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Herd>>> {
    let herds = state.services.farms.list_farm_herds(&claims, id).await?;
    Ok(Json(herds))
}

/// List active animals of one farm
#[utoipa::path(
    get,
    path = "/farms/{id}/animals",
    tag = "farms",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Farm ID"), AnimalQuery),
    responses(
        (status = 200, description = "Animals list", body = Vec<Animal>),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn list_farm_animals(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Query(query): Query<AnimalQuery>,
) -> AppResult<Json<Vec<Animal>>> {
    let animals = state
        .services
        .farms
        .list_farm_animals(&claims, id, query.sex)
        .await?;
    Ok(Json(animals))
}

/// List personnel assignments of one farm
#[utoipa::path(
    get,
    path = "/farms/{id}/personnel",
    tag = "farms",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Farm ID")),
    responses(
        (status = 200, description = "Personnel list", body = Vec<PersonnelAssignment>),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn list_farm_personnel(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<PersonnelAssignment>>> {
    let personnel = state
        .services
        .farms
        .list_farm_personnel(&claims, id)
        .await?;
    Ok(Json(personnel))
}
