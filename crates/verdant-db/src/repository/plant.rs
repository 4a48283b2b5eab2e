//! # Plant Repository
//!
//! Database operations for the plant catalog.
//!
//! ## Key Operations
//! - Catalog listing with category and text filters
//! - Point lookups by id, batch lookups for pricing
//! - Inserts for seeding
//!
//! Pricing calls [`PlantRepository::get_by_ids`] with every id in the cart
//! and hands the rows to the engine; the engine - not SQL - decides what a
//! missing row or an oversized quantity means.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use verdant_core::Plant;

/// Columns selected for every plant query, in [`Plant`] field order.
const PLANT_COLUMNS: &str = "id, name, description, care_instructions, \
     sunlight_requirements, category, price_cents, stock_quantity, \
     image_url, weight_grams, created_at, updated_at";

/// Repository for plant catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PlantRepository::new(pool);
///
/// // Filtered catalog listing
/// let results = repo.list(Some("houseplant"), Some("monstera")).await?;
///
/// // Batch lookup for pricing
/// let plants = repo.get_by_ids(&["plant_001".into()]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlantRepository {
    pool: SqlitePool,
}

impl PlantRepository {
    /// Creates a new PlantRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PlantRepository { pool }
    }

    /// Lists catalog plants, optionally filtered.
    ///
    /// ## Arguments
    /// * `category` - Exact category match, if given
    /// * `search` - Case-insensitive substring match over name and
    ///   description, if given
    pub async fn list(&self, category: Option<&str>, search: Option<&str>) -> DbResult<Vec<Plant>> {
        debug!(?category, ?search, "Listing plants");

        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {PLANT_COLUMNS} FROM plants WHERE 1=1"));

        if let Some(category) = category {
            qb.push(" AND category = ");
            qb.push_bind(category.to_string());
        }

        if let Some(search) = search {
            // SQLite LIKE is case-insensitive for ASCII, matching the
            // storefront's case-insensitive catalog search
            let pattern = format!("%{}%", search.trim());
            qb.push(" AND (name LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR description LIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }

        qb.push(" ORDER BY name");

        let plants = qb
            .build_query_as::<Plant>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = plants.len(), "Listing returned plants");
        Ok(plants)
    }

    /// Gets a plant by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Plant))` - Plant found
    /// * `Ok(None)` - Plant not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Plant>> {
        let plant = sqlx::query_as::<_, Plant>(&format!(
            "SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plant)
    }

    /// Gets every plant whose id is in `ids`.
    ///
    /// Missing ids are simply absent from the result; the pricing engine
    /// turns an absent row into its own not-found error.
    pub async fn get_by_ids(&self, ids: &[String]) -> DbResult<Vec<Plant>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = ids.len(), "Batch plant lookup");

        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id IN ("));
        let mut separated = qb.separated(", ");
        for id in ids {
            separated.push_bind(id.clone());
        }
        qb.push(")");

        let plants = qb
            .build_query_as::<Plant>()
            .fetch_all(&self.pool)
            .await?;

        Ok(plants)
    }

    /// Lists the distinct catalog categories.
    pub async fn categories(&self) -> DbResult<Vec<String>> {
        let categories: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT category FROM plants ORDER BY category")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    /// Inserts a new plant.
    ///
    /// ## Returns
    /// * `Ok(())` - Insert successful
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    pub async fn insert(&self, plant: &Plant) -> DbResult<()> {
        debug!(id = %plant.id, name = %plant.name, "Inserting plant");

        sqlx::query(
            r#"
            INSERT INTO plants (
                id, name, description, care_instructions,
                sunlight_requirements, category, price_cents, stock_quantity,
                image_url, weight_grams, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(&plant.id)
        .bind(&plant.name)
        .bind(&plant.description)
        .bind(&plant.care_instructions)
        .bind(&plant.sunlight_requirements)
        .bind(&plant.category)
        .bind(plant.price_cents)
        .bind(plant.stock_quantity)
        .bind(&plant.image_url)
        .bind(plant.weight_grams)
        .bind(plant.created_at)
        .bind(plant.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Adjusts stock by a delta (negative for sales, positive for restock).
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Plant doesn't exist
    pub async fn update_stock(&self, id: &str, delta: i64) -> DbResult<()> {
        debug!(id = %id, delta = %delta, "Updating stock");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE plants
            SET
                stock_quantity = stock_quantity + ?2,
                updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(delta)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Plant", id));
        }

        Ok(())
    }

    /// Counts catalog plants (for seed idempotence and diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new plant ID.
///
/// Seed data keeps the storefront's human-readable `plant_NNN` ids; plants
/// added later get UUIDs.
pub fn generate_plant_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn plant(id: &str, name: &str, category: &str, price_cents: i64, stock: i64) -> Plant {
        let now = Utc::now();
        Plant {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} for any home", name),
            care_instructions: "Water weekly".to_string(),
            sunlight_requirements: "Bright, indirect light".to_string(),
            category: category.to_string(),
            price_cents,
            stock_quantity: stock,
            image_url: String::new(),
            weight_grams: 2000,
            created_at: now,
            updated_at: now,
        }
    }

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.plants();
        repo.insert(&plant("plant_001", "Monstera Deliciosa", "houseplant", 2999, 25))
            .await
            .unwrap();
        repo.insert(&plant("plant_002", "Snake Plant", "houseplant", 1999, 40))
            .await
            .unwrap();
        repo.insert(&plant("plant_005", "Succulent Collection", "succulent", 2499, 20))
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let db = seeded_db().await;

        let found = db.plants().get_by_id("plant_001").await.unwrap().unwrap();
        assert_eq!(found.name, "Monstera Deliciosa");
        assert_eq!(found.price_cents, 2999);

        let missing = db.plants().get_by_id("plant_999").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let db = seeded_db().await;
        let dup = plant("plant_001", "Imposter", "houseplant", 100, 1);

        let err = db.plants().insert(&dup).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let db = seeded_db().await;

        let all = db.plants().list(None, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let houseplants = db.plants().list(Some("houseplant"), None).await.unwrap();
        assert_eq!(houseplants.len(), 2);

        // Case-insensitive substring over name/description
        let searched = db.plants().list(None, Some("monstera")).await.unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, "plant_001");
    }

    #[tokio::test]
    async fn test_get_by_ids_skips_missing() {
        let db = seeded_db().await;

        let plants = db
            .plants()
            .get_by_ids(&["plant_001".to_string(), "plant_999".to_string()])
            .await
            .unwrap();

        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].id, "plant_001");
    }

    #[tokio::test]
    async fn test_categories_are_distinct_and_sorted() {
        let db = seeded_db().await;
        let categories = db.plants().categories().await.unwrap();
        assert_eq!(categories, vec!["houseplant", "succulent"]);
    }

    #[tokio::test]
    async fn test_update_stock() {
        let db = seeded_db().await;

        db.plants().update_stock("plant_002", -5).await.unwrap();
        let updated = db.plants().get_by_id("plant_002").await.unwrap().unwrap();
        assert_eq!(updated.stock_quantity, 35);

        let err = db.plants().update_stock("plant_999", 1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
