//! Repository layer for database operations

pub mod animals;
pub mod farms;
pub mod herds;
pub mod owners;
pub mod personnel;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub owners: owners::OwnersRepository,
    pub farms: farms::FarmsRepository,
    pub herds: herds::HerdsRepository,
    pub animals: animals::AnimalsRepository,
    pub personnel: personnel::PersonnelRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            owners: owners::OwnersRepository::new(pool.clone()),
            farms: farms::FarmsRepository::new(pool.clone()),
            herds: herds::HerdsRepository::new(pool.clone()),
            animals: animals::AnimalsRepository::new(pool.clone()),
            personnel: personnel::PersonnelRepository::new(pool.clone()),
            pool,
        }
    }
}
