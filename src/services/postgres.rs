use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::{AdopterProfile, AnimalCandidate};
use crate::services::store::{AnimalCatalog, ProfileStore, StoreError};

/// Default upper bound on the ranking pool
pub const DEFAULT_POOL_CAP: usize = 200;

const ANIMAL_COLUMNS: &str = r#"
    id, name, species, breed, age, size, energy, good_with_children,
    city, description, photo_url, donor_name, donor_whatsapp, created_at
"#;

/// PostgreSQL-backed profile store and animal catalog
///
/// Reads the `animals` and `adopter_profiles` tables. Only rows with
/// `available = TRUE` are offered as candidates.
pub struct PostgresClient {
    pool: PgPool,
    pool_cap: usize,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self {
            pool,
            pool_cap: DEFAULT_POOL_CAP,
        })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Upper bound on rows returned by [`AnimalCatalog::list_all`]
    pub fn with_pool_cap(mut self, pool_cap: usize) -> Self {
        self.pool_cap = pool_cap;
        self
    }

    async fn fetch_available(&self, limit: usize) -> Result<Vec<AnimalCandidate>, StoreError> {
        let query = format!(
            "SELECT {} FROM animals WHERE available = TRUE ORDER BY created_at DESC, id DESC LIMIT $1",
            ANIMAL_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(animal_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}

fn animal_from_row(row: &PgRow) -> Result<AnimalCandidate, sqlx::Error> {
    Ok(AnimalCandidate {
        id: row.try_get("id")?,
        name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        species: row.try_get::<Option<String>, _>("species")?.unwrap_or_default(),
        breed: row.try_get("breed")?,
        age: row.try_get("age")?,
        size: row.try_get("size")?,
        energy: row.try_get("energy")?,
        good_with_children: row.try_get("good_with_children")?,
        city: row.try_get("city")?,
        description: row.try_get("description")?,
        photo_url: row.try_get("photo_url")?,
        donor_name: row.try_get("donor_name")?,
        donor_whatsapp: row.try_get("donor_whatsapp")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ProfileStore for PostgresClient {
    async fn get_profile(&self, user_id: i64) -> Result<Option<AdopterProfile>, StoreError> {
        let query = r#"
            SELECT housing_type, has_children, weekly_hours_available, lifestyle, updated_at
            FROM adopter_profiles
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let profile = row
            .map(|row| -> Result<AdopterProfile, sqlx::Error> {
                Ok(AdopterProfile {
                    housing_type: row.try_get("housing_type")?,
                    has_children: row.try_get("has_children")?,
                    weekly_hours_available: row.try_get("weekly_hours_available")?,
                    lifestyle: row.try_get("lifestyle")?,
                    updated_at: row.try_get("updated_at")?,
                })
            })
            .transpose()?;

        tracing::debug!("Profile lookup for user {}: found={}", user_id, profile.is_some());

        Ok(profile)
    }

    /// Uses INSERT ... ON CONFLICT so a second save replaces the first
    async fn upsert_profile(&self, user_id: i64, profile: &AdopterProfile) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO adopter_profiles
                (user_id, housing_type, has_children, weekly_hours_available, lifestyle, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET
                housing_type = EXCLUDED.housing_type,
                has_children = EXCLUDED.has_children,
                weekly_hours_available = EXCLUDED.weekly_hours_available,
                lifestyle = EXCLUDED.lifestyle,
                updated_at = EXCLUDED.updated_at
        "#;

        sqlx::query(query)
            .bind(user_id)
            .bind(&profile.housing_type)
            .bind(profile.has_children)
            .bind(profile.weekly_hours_available)
            .bind(&profile.lifestyle)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved adopter profile for user {}", user_id);

        Ok(())
    }
}

#[async_trait]
impl AnimalCatalog for PostgresClient {
    async fn list_available(&self, limit: usize) -> Result<Vec<AnimalCandidate>, StoreError> {
        self.fetch_available(limit).await
    }

    async fn list_all(&self) -> Result<Vec<AnimalCandidate>, StoreError> {
        self.fetch_available(self.pool_cap).await
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
