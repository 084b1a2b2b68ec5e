// web_app/api/db.rs - PostgreSQL-backed catalog repository
//
// Tables live in a configurable schema ("catalog" by default) so tests can
// run side by side in isolated schemas. Rows are returned in id order,
// which is the natural order the filter engine preserves.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::web_app::api::repository::ProductRepository;
use crate::web_app::error::Result;
use crate::web_app::model::*;

pub const DEFAULT_SCHEMA: &str = "catalog";

const PRODUCT_COLUMNS: &str =
    "id, name, franchise_id, category_id, calories, protein, carbs, fat, allergens, weight, featured_product";

/// Create a PostgreSQL connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Database pool ready ({} connections max)", max_connections);
    Ok(pool)
}

/// DDL for the catalog tables inside `schema`
pub fn schema_sql(schema: &str) -> Vec<String> {
    vec![
        format!("CREATE SCHEMA IF NOT EXISTS {schema}"),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {schema}.categories (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                name_korean TEXT NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {schema}.franchises (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                category_id INTEGER NOT NULL REFERENCES {schema}.categories(id),
                logo_url TEXT
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {schema}.allergens (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                name_korean TEXT NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {schema}.products (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                franchise_id INTEGER NOT NULL REFERENCES {schema}.franchises(id),
                category_id INTEGER NOT NULL REFERENCES {schema}.categories(id),
                calories DOUBLE PRECISION,
                protein DOUBLE PRECISION,
                carbs DOUBLE PRECISION,
                fat DOUBLE PRECISION,
                allergens INTEGER[] NOT NULL DEFAULT '{{}}',
                weight DOUBLE PRECISION,
                featured_product BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#
        ),
        format!("CREATE INDEX IF NOT EXISTS products_franchise_idx ON {schema}.products (franchise_id)"),
        format!("CREATE INDEX IF NOT EXISTS products_category_idx ON {schema}.products (category_id)"),
    ]
}

/// Create the catalog schema and tables if they do not exist
pub async fn migrate(pool: &PgPool, schema: &str) -> Result<()> {
    for statement in schema_sql(schema) {
        sqlx::query(&statement).execute(pool).await?;
    }
    tracing::info!("Schema {} is up to date", schema);
    Ok(())
}

/// Drop the schema and everything in it
pub async fn drop_schema(pool: &PgPool, schema: &str) -> Result<()> {
    sqlx::query(&format!("DROP SCHEMA IF EXISTS {schema} CASCADE"))
        .execute(pool)
        .await?;
    Ok(())
}

/// Number of products stored in `schema`
pub async fn product_count(pool: &PgPool, schema: &str) -> Result<i64> {
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {schema}.products"))
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}

/// Insert a whole catalog in one transaction, updating rows that exist
pub async fn seed_catalog(pool: &PgPool, schema: &str, catalog: &Catalog) -> Result<()> {
    let mut tx = pool.begin().await?;

    for category in &catalog.categories {
        sqlx::query(&format!(
            "INSERT INTO {schema}.categories (id, name, name_korean) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, name_korean = EXCLUDED.name_korean"
        ))
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.name_korean)
        .execute(&mut *tx)
        .await?;
    }

    for franchise in &catalog.franchises {
        sqlx::query(&format!(
            "INSERT INTO {schema}.franchises (id, name, category_id, logo_url) VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, category_id = EXCLUDED.category_id,
             logo_url = EXCLUDED.logo_url"
        ))
        .bind(franchise.id)
        .bind(&franchise.name)
        .bind(franchise.category_id)
        .bind(&franchise.logo_url)
        .execute(&mut *tx)
        .await?;
    }

    for allergen in &catalog.allergens {
        sqlx::query(&format!(
            "INSERT INTO {schema}.allergens (id, name, name_korean) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, name_korean = EXCLUDED.name_korean"
        ))
        .bind(allergen.id)
        .bind(&allergen.name)
        .bind(&allergen.name_korean)
        .execute(&mut *tx)
        .await?;
    }

    for product in &catalog.products {
        sqlx::query(&format!(
            r#"
            INSERT INTO {schema}.products ({PRODUCT_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                franchise_id = EXCLUDED.franchise_id,
                category_id = EXCLUDED.category_id,
                calories = EXCLUDED.calories,
                protein = EXCLUDED.protein,
                carbs = EXCLUDED.carbs,
                fat = EXCLUDED.fat,
                allergens = EXCLUDED.allergens,
                weight = EXCLUDED.weight,
                featured_product = EXCLUDED.featured_product
            "#
        ))
        .bind(product.id)
        .bind(&product.name)
        .bind(product.franchise_id)
        .bind(product.category_id)
        .bind(product.calories)
        .bind(product.protein)
        .bind(product.carbs)
        .bind(product.fat)
        .bind(&product.allergens)
        .bind(product.weight)
        .bind(product.featured_product)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        "Seeded schema {} with {} products",
        schema,
        catalog.products.len()
    );
    Ok(())
}

/// Repository reading the catalog tables through a connection pool
#[derive(Clone, Debug)]
pub struct PgRepository {
    pool: PgPool,
    schema: String,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_schema(pool, DEFAULT_SCHEMA)
    }

    pub fn with_schema(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    async fn products_where(&self, clause: &str, value: i32) -> Result<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM {}.products WHERE {clause} = $1 ORDER BY id",
            self.schema
        );
        Ok(sqlx::query_as::<_, Product>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl ProductRepository for PgRepository {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM {}.products ORDER BY id", self.schema);
        Ok(sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM {}.products WHERE id = $1", self.schema);
        Ok(sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_products_by_franchise(&self, franchise_id: i32) -> Result<Vec<Product>> {
        self.products_where("franchise_id", franchise_id).await
    }

    async fn list_products_by_category(&self, category_id: i32) -> Result<Vec<Product>> {
        self.products_where("category_id", category_id).await
    }

    async fn list_franchises(&self) -> Result<Vec<Franchise>> {
        let sql = format!(
            "SELECT id, name, category_id, logo_url FROM {}.franchises ORDER BY id",
            self.schema
        );
        Ok(sqlx::query_as::<_, Franchise>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_franchise(&self, id: i32) -> Result<Option<Franchise>> {
        let sql = format!(
            "SELECT id, name, category_id, logo_url FROM {}.franchises WHERE id = $1",
            self.schema
        );
        Ok(sqlx::query_as::<_, Franchise>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_franchises_by_category(&self, category_id: i32) -> Result<Vec<Franchise>> {
        let sql = format!(
            "SELECT id, name, category_id, logo_url FROM {}.franchises WHERE category_id = $1 ORDER BY id",
            self.schema
        );
        Ok(sqlx::query_as::<_, Franchise>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let sql = format!("SELECT id, name, name_korean FROM {}.categories ORDER BY id", self.schema);
        Ok(sqlx::query_as::<_, Category>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let sql = format!("SELECT id, name, name_korean FROM {}.categories WHERE id = $1", self.schema);
        Ok(sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_allergens(&self) -> Result<Vec<Allergen>> {
        let sql = format!("SELECT id, name, name_korean FROM {}.allergens ORDER BY id", self.schema);
        Ok(sqlx::query_as::<_, Allergen>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_allergen(&self, id: i32) -> Result<Option<Allergen>> {
        let sql = format!("SELECT id, name, name_korean FROM {}.allergens WHERE id = $1", self.schema);
        Ok(sqlx::query_as::<_, Allergen>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}
