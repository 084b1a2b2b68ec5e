// common/mod.rs - Shared test utilities
//
// In-memory helpers are always available. The Postgres helpers give each
// test its own schema so runs are idempotent and can overlap:
// 1. Clean setup: drop any leftover schema, migrate, seed
// 2. Run the test body
// 3. Always tear the schema down again

#![allow(dead_code)]

use nutrition_search::fixtures::sample_catalog;
use nutrition_search::web_app::api::repository::InMemoryRepository;
use nutrition_search::web_app::model::Product;

/// Repository over the sample catalog
pub fn sample_repository() -> InMemoryRepository {
    InMemoryRepository::new(sample_catalog())
}

/// Product ids in result order
pub fn ids(products: &[Product]) -> Vec<i32> {
    products.iter().map(|p| p.id).collect()
}

/// Minimal product with just the fields the engine looks at
pub fn product(id: i32, calories: Option<f64>, protein: Option<f64>) -> Product {
    Product {
        id,
        name: format!("product {id}"),
        franchise_id: 1,
        category_id: 1,
        calories,
        protein,
        carbs: None,
        fat: None,
        allergens: vec![],
        weight: None,
        featured_product: false,
    }
}

#[cfg(feature = "db-tools")]
pub use postgres::*;

#[cfg(feature = "db-tools")]
mod postgres {
    use nutrition_search::fixtures::sample_catalog;
    use nutrition_search::web_app::api::db;
    use sqlx::postgres::PgPoolOptions;
    use sqlx::PgPool;
    use std::env;
    use std::time::Duration;

    /// Create a database connection pool for testing
    pub async fn create_test_pool() -> anyhow::Result<PgPool> {
        dotenv::dotenv().ok();
        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in environment");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(60))
            .connect(&database_url)
            .await?;

        Ok(pool)
    }

    /// Generate a valid, unique schema name for a test
    pub fn generate_test_schema_name(test_name: &str) -> String {
        let sanitized = test_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c.to_ascii_lowercase() } else { '_' })
            .collect::<String>();

        // PostgreSQL identifiers are limited to 63 bytes
        let truncated = if sanitized.len() > 50 {
            &sanitized[..50]
        } else {
            &sanitized
        };

        format!("test_{}", truncated)
    }

    /// Full setup and teardown wrapper for tests with an isolated schema
    pub async fn with_test_db<F, Fut>(test_name: &str, test_fn: F) -> anyhow::Result<()>
    where
        F: FnOnce(PgPool, String) -> Fut,
        Fut: std::future::Future<Output = anyhow::Result<()>>,
    {
        let pool = create_test_pool().await?;
        let schema = generate_test_schema_name(test_name);

        db::drop_schema(&pool, &schema).await?;
        db::migrate(&pool, &schema).await?;
        db::seed_catalog(&pool, &schema, &sample_catalog()).await?;

        let result = test_fn(pool.clone(), schema.clone()).await;

        // Always cleanup, even if the test failed
        db::drop_schema(&pool, &schema).await?;

        result
    }
}
