//! Statistics reporting service
//!
//! Resolves the caller's authorization scope, runs a fixed set of grouped
//! counting queries and joins the results into the per-farm and per-herd
//! breakdown returned by the reporting endpoint. Read-only; each invocation
//! is independent and no transactional guarantee is required since the data
//! is only displayed.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
    api::reports::{FarmStatistics, FarmStatsDetail, HerdStatsDetail, StatsSummary},
    error::{AppError, AppResult},
    models::{farm::Farm, herd::Herd, user::UserClaims},
    repository::Repository,
};

/// Grouped count rows feeding the report assembly
struct AggregateRows {
    herds_by_farm: Vec<(i64, i64)>,
    total_animals: i64,
    animals_by_sex: Vec<(String, i64)>,
    animals_by_herd: Vec<(i64, i64)>,
    animals_by_farm: Vec<(i64, i64)>,
    total_personnel: i64,
    personnel_by_type: Vec<(String, i64)>,
    personnel_by_farm: Vec<(i64, i64)>,
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute consolidated statistics for the farms in the caller's scope.
    ///
    /// Admins may pass `owner_filter` to report on one owner, or none to span
    /// all owners. Owner accounts are always scoped to their own farms and
    /// the filter is ignored. `farm_filter` narrows the scope to one farm.
    pub async fn farm_statistics(
        &self,
        claims: &UserClaims,
        owner_filter: Option<i64>,
        farm_filter: Option<i64>,
    ) -> AppResult<FarmStatistics> {
        let owner_id = self.resolve_owner_scope(claims, owner_filter).await?;

        let farms = self
            .repository
            .farms
            .list_active(owner_id, farm_filter)
            .await?;

        if farms.is_empty() {
            return Err(AppError::NotFound("No farms found".to_string()));
        }

        let farm_ids: Vec<i64> = farms.iter().map(|f| f.id).collect();

        let herds = self.repository.herds.list_active_in_farms(&farm_ids).await?;
        let herd_ids: Vec<i64> = herds.iter().map(|h| h.id).collect();

        let rows = AggregateRows {
            herds_by_farm: self.repository.herds.count_active_by_farm(&farm_ids).await?,
            total_animals: self
                .repository
                .animals
                .count_active_in_herds(&herd_ids)
                .await?,
            animals_by_sex: self
                .repository
                .animals
                .count_active_by_sex(&herd_ids)
                .await?,
            animals_by_herd: self
                .repository
                .animals
                .count_active_by_herd(&herd_ids)
                .await?,
            animals_by_farm: self
                .repository
                .animals
                .count_active_by_farm(&farm_ids)
                .await?,
            total_personnel: self.repository.personnel.count_in_farms(&farm_ids).await?,
            personnel_by_type: self.repository.personnel.count_by_type(&farm_ids).await?,
            personnel_by_farm: self.repository.personnel.count_by_farm(&farm_ids).await?,
        };

        Ok(assemble_statistics(&farms, &herds, rows))
    }

    /// Resolve the owner scope for the caller.
    ///
    /// Admins: optional explicit owner (404 if unknown), otherwise unscoped.
    /// Non-admins: their own owner account is mandatory (403 if none).
    async fn resolve_owner_scope(
        &self,
        claims: &UserClaims,
        owner_filter: Option<i64>,
    ) -> AppResult<Option<i64>> {
        if claims.is_admin() {
            match owner_filter {
                Some(id) => {
                    let owner = self
                        .repository
                        .owners
                        .get_by_id(id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;
                    Ok(Some(owner.id))
                }
                None => Ok(None),
            }
        } else {
            let owner = self
                .repository
                .owners
                .find_by_user(claims.user_id)
                .await?
                .ok_or_else(|| AppError::Authorization("User is not an owner".to_string()))?;
            Ok(Some(owner.id))
        }
    }
}

/// Join the grouped count rows into the report body.
///
/// Detail rows follow the farm/herd query order; missing keys in the
/// per-id count maps default to zero.
fn assemble_statistics(farms: &[Farm], herds: &[Herd], rows: AggregateRows) -> FarmStatistics {
    let herds_by_farm: HashMap<i64, i64> = rows.herds_by_farm.into_iter().collect();
    let animals_by_herd: HashMap<i64, i64> = rows.animals_by_herd.into_iter().collect();
    let animals_by_farm: HashMap<i64, i64> = rows.animals_by_farm.into_iter().collect();
    let personnel_by_farm: HashMap<i64, i64> = rows.personnel_by_farm.into_iter().collect();

    let farms_detail = farms
        .iter()
        .map(|farm| FarmStatsDetail {
            farm_id: farm.id,
            name: farm.name.clone(),
            herd_count: herds_by_farm.get(&farm.id).copied().unwrap_or(0),
            animal_count: animals_by_farm.get(&farm.id).copied().unwrap_or(0),
            personnel_count: personnel_by_farm.get(&farm.id).copied().unwrap_or(0),
        })
        .collect();

    let herds_detail = herds
        .iter()
        .map(|herd| HerdStatsDetail {
            herd_id: herd.id,
            farm_id: herd.farm_id,
            name: herd.name.clone(),
            animal_count: animals_by_herd.get(&herd.id).copied().unwrap_or(0),
        })
        .collect();

    FarmStatistics {
        summary: StatsSummary {
            total_farms: farms.len() as i64,
            total_herds: herds.len() as i64,
            total_animals: rows.total_animals,
            total_personnel: rows.total_personnel,
        },
        animals_by_sex: rows.animals_by_sex.into_iter().collect::<IndexMap<_, _>>(),
        personnel_by_type: rows
            .personnel_by_type
            .into_iter()
            .collect::<IndexMap<_, _>>(),
        farms: farms_detail,
        herds: herds_detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm(id: i64, owner_id: i64, name: &str) -> Farm {
        Farm {
            id,
            owner_id,
            name: name.to_string(),
            location: None,
            archived: false,
            created_at: None,
        }
    }

    fn herd(id: i64, farm_id: i64, name: &str) -> Herd {
        Herd {
            id,
            farm_id,
            name: name.to_string(),
            archived: false,
            created_at: None,
        }
    }

    /// Owner with two farms: F1 has herds H1 (3 animals) and H2 (empty),
    /// F2 has one herd with 1 animal; one personnel record on F1.
    #[test]
    fn assembles_two_farm_scenario() {
        let farms = vec![farm(1, 10, "La Esperanza"), farm(2, 10, "El Roble")];
        let herds = vec![herd(1, 1, "H1"), herd(2, 1, "H2"), herd(3, 2, "H3")];

        let rows = AggregateRows {
            herds_by_farm: vec![(1, 2), (2, 1)],
            total_animals: 4,
            animals_by_sex: vec![("female".to_string(), 3), ("male".to_string(), 1)],
            animals_by_herd: vec![(1, 3), (3, 1)],
            animals_by_farm: vec![(1, 3), (2, 1)],
            total_personnel: 1,
            personnel_by_type: vec![("caretaker".to_string(), 1)],
            personnel_by_farm: vec![(1, 1)],
        };

        let stats = assemble_statistics(&farms, &herds, rows);

        assert_eq!(stats.summary.total_farms, 2);
        assert_eq!(stats.summary.total_herds, 3);
        assert_eq!(stats.summary.total_animals, 4);
        assert_eq!(stats.summary.total_personnel, 1);

        assert_eq!(stats.farms.len(), 2);
        let f1 = &stats.farms[0];
        assert_eq!(f1.farm_id, 1);
        assert_eq!(f1.herd_count, 2);
        assert_eq!(f1.animal_count, 3);
        assert_eq!(f1.personnel_count, 1);
        let f2 = &stats.farms[1];
        assert_eq!(f2.herd_count, 1);
        assert_eq!(f2.animal_count, 1);
        assert_eq!(f2.personnel_count, 0);

        // Empty herd H2 appears with a zero count
        let h2 = stats.herds.iter().find(|h| h.herd_id == 2).unwrap();
        assert_eq!(h2.animal_count, 0);
    }

    #[test]
    fn summary_totals_match_detail_lengths() {
        let farms = vec![farm(5, 1, "Solo")];
        let herds = vec![herd(9, 5, "Only herd")];

        let rows = AggregateRows {
            herds_by_farm: vec![(5, 1)],
            total_animals: 2,
            animals_by_sex: vec![("female".to_string(), 2)],
            animals_by_herd: vec![(9, 2)],
            animals_by_farm: vec![(5, 2)],
            total_personnel: 0,
            personnel_by_type: vec![],
            personnel_by_farm: vec![],
        };

        let stats = assemble_statistics(&farms, &herds, rows);

        assert_eq!(stats.summary.total_farms, stats.farms.len() as i64);
        assert_eq!(stats.summary.total_herds, stats.herds.len() as i64);
        assert_eq!(
            stats.farms.iter().map(|f| f.animal_count).sum::<i64>(),
            stats.summary.total_animals
        );
        assert_eq!(
            stats.animals_by_sex.values().sum::<i64>(),
            stats.summary.total_animals
        );
        assert_eq!(
            stats.personnel_by_type.values().sum::<i64>(),
            stats.summary.total_personnel
        );
    }

    /// A farm with no herds, animals or personnel gets explicit zeros,
    /// never missing fields.
    #[test]
    fn missing_group_keys_default_to_zero() {
        let farms = vec![farm(1, 1, "Empty farm")];
        let herds: Vec<Herd> = vec![];

        let rows = AggregateRows {
            herds_by_farm: vec![],
            total_animals: 0,
            animals_by_sex: vec![],
            animals_by_herd: vec![],
            animals_by_farm: vec![],
            total_personnel: 0,
            personnel_by_type: vec![],
            personnel_by_farm: vec![],
        };

        let stats = assemble_statistics(&farms, &herds, rows);

        assert_eq!(stats.farms[0].herd_count, 0);
        assert_eq!(stats.farms[0].animal_count, 0);
        assert_eq!(stats.farms[0].personnel_count, 0);
        assert!(stats.herds.is_empty());
        assert!(stats.animals_by_sex.is_empty());
    }

    /// Group-by row order is preserved in the serialized maps
    #[test]
    fn breakdown_maps_preserve_query_order() {
        let farms = vec![farm(1, 1, "F")];
        let herds: Vec<Herd> = vec![];

        let rows = AggregateRows {
            herds_by_farm: vec![],
            total_animals: 5,
            animals_by_sex: vec![
                ("female".to_string(), 3),
                ("male".to_string(), 1),
                ("unknown".to_string(), 1),
            ],
            animals_by_herd: vec![],
            animals_by_farm: vec![(1, 5)],
            total_personnel: 0,
            personnel_by_type: vec![],
            personnel_by_farm: vec![],
        };

        let stats = assemble_statistics(&farms, &herds, rows);

        let keys: Vec<&String> = stats.animals_by_sex.keys().collect();
        assert_eq!(keys, ["female", "male", "unknown"]);
    }
}
