/// PostgreSQL repository tests
///
/// Each test gets its own schema seeded with the sample catalog, so the
/// assertions mirror the in-memory ones: both repositories must feed the
/// filter engine the same snapshot.
///
/// Prerequisites:
/// - DATABASE_URL environment variable set
/// - A PostgreSQL server the user may create schemas on
///
/// Run with: cargo test --test postgres_repository_tests --features db-tools

mod common;

use anyhow::Result;

use nutrition_search::fixtures::sample_catalog;
use nutrition_search::web_app::api::db::{self, PgRepository};
use nutrition_search::web_app::api::queries;
use nutrition_search::web_app::api::repository::ProductRepository;
use nutrition_search::web_app::model::SearchQuery;

use common::{ids, sample_repository, with_test_db};

#[tokio::test]
async fn test_products_round_trip() -> Result<()> {
    with_test_db("pg_products_round_trip", |pool, schema| async move {
        let repo = PgRepository::with_schema(pool, schema);

        let products = repo.list_products().await?;
        println!("Loaded {} products from Postgres", products.len());

        assert_eq!(products, sample_catalog().products);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_lookups_and_subsets() -> Result<()> {
    with_test_db("pg_lookups", |pool, schema| async move {
        let repo = PgRepository::with_schema(pool, schema);

        let product = repo.get_product(6).await?.expect("product 6 is seeded");
        assert_eq!(product.calories, None);
        assert_eq!(product.allergens, vec![1, 2, 3, 6]);
        assert!(repo.get_product(999).await?.is_none());

        assert_eq!(ids(&repo.list_products_by_franchise(5).await?), vec![8, 9]);
        assert_eq!(ids(&repo.list_products_by_category(4).await?), vec![10, 11]);

        assert_eq!(repo.list_franchises_by_category(3).await?.len(), 2);
        assert_eq!(repo.get_category(1).await?.unwrap().name_korean, "치킨");
        assert_eq!(repo.list_allergens().await?.len(), 8);
        assert!(repo.get_allergen(99).await?.is_none());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_search_matches_in_memory_repository() -> Result<()> {
    with_test_db("pg_search_parity", |pool, schema| async move {
        let pg = PgRepository::with_schema(pool, schema);
        let memory = sample_repository();

        let cases = vec![
            SearchQuery::default(),
            SearchQuery::new().with_text("치킨"),
            SearchQuery::new().in_category(3).max_calories(240.0),
            SearchQuery::new().in_franchise(3).max_fat(12.0),
            SearchQuery::new().min_protein(15.0).max_carbs(15.0),
        ];

        for query in cases {
            let from_pg = queries::search_products(&pg, &query).await?;
            let from_memory = queries::search_products(&memory, &query).await?;
            println!("  - {:?}: {} results", query, from_pg.len());
            assert_eq!(ids(&from_pg), ids(&from_memory));
        }
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_seed_is_idempotent() -> Result<()> {
    with_test_db("pg_seed_twice", |pool, schema| async move {
        db::seed_catalog(&pool, &schema, &sample_catalog()).await?;

        let count = db::product_count(&pool, &schema).await?;
        assert_eq!(count, sample_catalog().products.len() as i64);
        Ok(())
    })
    .await
}
