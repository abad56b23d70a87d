//! Development seed data loader
//!
//! Wipes the domain tables and repopulates them with the fixture the
//! integration tests run against: an administrator (admin/admin), an owner
//! account (maria/maria) with two active farms plus one archived farm, and
//! a user with no owner account (pedro/pedro).
//!
//! Run with `cargo run --bin seed`. Re-running resets the fixture.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use ganaderia_server::{config::AppConfig, models::enums::Sex};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load().expect("Failed to load configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    clear_tables(&pool).await?;

    insert_user(&pool, "admin", "admin", "Ana", "Admin", true).await?;
    let maria = insert_user(&pool, "maria", "maria", "Maria", "Fernandez", false).await?;
    insert_user(&pool, "pedro", "pedro", "Pedro", "Suarez", false).await?;

    let owner_id: i64 =
        sqlx::query_scalar("INSERT INTO owners (user_id, name) VALUES ($1, $2) RETURNING id")
            .bind(maria)
            .bind("Maria Fernandez")
            .fetch_one(&pool)
            .await?;

    // Two active farms and one archived farm for the same owner
    let esperanza = insert_farm(&pool, owner_id, "La Esperanza", false).await?;
    let roble = insert_farm(&pool, owner_id, "El Roble", false).await?;
    let vieja = insert_farm(&pool, owner_id, "La Vieja", true).await?;

    let lecheras = insert_herd(&pool, esperanza, "Lecheras", false).await?;
    insert_herd(&pool, esperanza, "Terneras", false).await?;
    let engorde = insert_herd(&pool, roble, "Engorde", false).await?;
    let retiradas = insert_herd(&pool, esperanza, "Retiradas", true).await?;
    let fantasma = insert_herd(&pool, vieja, "Fantasma", false).await?;

    // Active animals in scope: 3 on La Esperanza, 1 on El Roble
    insert_animal(&pool, lecheras, "ESP-001", Sex::Female, false).await?;
    insert_animal(&pool, lecheras, "ESP-002", Sex::Female, false).await?;
    insert_animal(&pool, lecheras, "ESP-003", Sex::Male, false).await?;
    insert_animal(&pool, engorde, "ROB-001", Sex::Female, false).await?;
    // Out of scope: archived animal, animal in an archived herd,
    // animal on an archived farm
    insert_animal(&pool, lecheras, "ESP-OLD", Sex::Female, true).await?;
    insert_animal(&pool, retiradas, "RET-001", Sex::Male, false).await?;
    insert_animal(&pool, fantasma, "VIE-001", Sex::Unknown, false).await?;

    insert_personnel(&pool, esperanza, "Jose Ramirez", "caretaker").await?;
    insert_personnel(&pool, vieja, "Luis Ortega", "caretaker").await?;

    tracing::info!("Seed data loaded");
    Ok(())
}

async fn clear_tables(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    sqlx::query(
        "TRUNCATE farm_personnel, animals, herds, farms, owners, users RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn insert_user(
    pool: &Pool<Postgres>,
    login: &str,
    password: &str,
    firstname: &str,
    lastname: &str,
    is_admin: bool,
) -> anyhow::Result<i64> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    let id = sqlx::query_scalar(
        r#"
        INSERT INTO users (login, password_hash, firstname, lastname, is_admin)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(login)
    .bind(hash)
    .bind(firstname)
    .bind(lastname)
    .bind(is_admin)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn insert_farm(
    pool: &Pool<Postgres>,
    owner_id: i64,
    name: &str,
    archived: bool,
) -> anyhow::Result<i64> {
    let id = sqlx::query_scalar(
        "INSERT INTO farms (owner_id, name, archived) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(owner_id)
    .bind(name)
    .bind(archived)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn insert_herd(
    pool: &Pool<Postgres>,
    farm_id: i64,
    name: &str,
    archived: bool,
) -> anyhow::Result<i64> {
    let id = sqlx::query_scalar(
        "INSERT INTO herds (farm_id, name, archived) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(farm_id)
    .bind(name)
    .bind(archived)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn insert_animal(
    pool: &Pool<Postgres>,
    herd_id: i64,
    tag: &str,
    sex: Sex,
    archived: bool,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO animals (herd_id, tag, sex, archived) VALUES ($1, $2, $3, $4)")
        .bind(herd_id)
        .bind(tag)
        .bind(sex)
        .bind(archived)
        .execute(pool)
        .await?;

    Ok(())
}

async fn insert_personnel(
    pool: &Pool<Postgres>,
    farm_id: i64,
    name: &str,
    worker_type: &str,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO farm_personnel (farm_id, name, worker_type) VALUES ($1, $2, $3)")
        .bind(farm_id)
        .bind(name)
        .bind(worker_type)
        .execute(pool)
        .await?;

    Ok(())
}
