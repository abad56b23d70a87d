//! Farm browsing service

use crate::{
    error::{AppError, AppResult},
    models::{
        animal::Animal, enums::Sex, farm::Farm, herd::Herd, personnel::PersonnelAssignment,
        user::UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct FarmsService {
    repository: Repository,
}

impl FarmsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List active farms visible to the caller.
    /// Admins see all farms, or one owner's farms when a filter is given.
    /// Owner accounts always see their own farms; the filter is ignored.
    pub async fn list_farms(
        &self,
        claims: &UserClaims,
        owner_filter: Option<i64>,
    ) -> AppResult<Vec<Farm>> {
        let owner_id = if claims.is_admin() {
            owner_filter
        } else {
            Some(self.resolve_caller_owner(claims).await?)
        };

        self.repository.farms.list_active(owner_id, None).await
    }

    /// Get one farm, enforcing ownership for non-admin callers.
    /// Archived farms are not exposed through the browse API.
    pub async fn get_farm(&self, claims: &UserClaims, farm_id: i64) -> AppResult<Farm> {
        let farm = self
            .repository
            .farms
            .get_by_id(farm_id)
            .await?
            .filter(|f| !f.archived)
            .ok_or_else(|| AppError::NotFound(format!("Farm with id {} not found", farm_id)))?;

        if !claims.is_admin() {
            let owner_id = self.resolve_caller_owner(claims).await?;
            if farm.owner_id != owner_id {
                // Do not reveal other owners' farm ids
                return Err(AppError::NotFound(format!(
                    "Farm with id {} not found",
                    farm_id
                )));
            }
        }

        Ok(farm)
    }

    /// List active herds of one farm visible to the caller
    pub async fn list_farm_herds(&self, claims: &UserClaims, farm_id: i64) -> AppResult<Vec<Herd>> {
        let farm = self.get_farm(claims, farm_id).await?;
        self.repository.herds.list_active_in_farms(&[farm.id]).await
    }

    /// List active animals of one farm, optionally restricted to one sex
    pub async fn list_farm_animals(
        &self,
        claims: &UserClaims,
        farm_id: i64,
        sex: Option<Sex>,
    ) -> AppResult<Vec<Animal>> {
        let farm = self.get_farm(claims, farm_id).await?;
        self.repository
            .animals
            .list_active_in_farm(farm.id, sex)
            .await
    }

    /// List personnel assignments of one farm
    pub async fn list_farm_personnel(
        &self,
        claims: &UserClaims,
        farm_id: i64,
    ) -> AppResult<Vec<PersonnelAssignment>> {
        let farm = self.get_farm(claims, farm_id).await?;
        self.repository.personnel.list_by_farm(farm.id).await
    }

    async fn resolve_caller_owner(&self, claims: &UserClaims) -> AppResult<i64> {
        let owner = self
            .repository
            .owners
            .find_by_user(claims.user_id)
            .await?
            .ok_or_else(|| AppError::Authorization("User is not an owner".to_string()))?;

        Ok(owner.id)
    }
}
