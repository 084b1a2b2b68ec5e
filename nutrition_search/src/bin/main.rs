// Franchise nutrition catalog server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - PostgreSQL connection pool when DATABASE_URL is set (db-tools feature)
// - The JSON catalog file otherwise

#[cfg(feature = "web")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_web::{web, App, HttpServer};
    use nutrition_search::web_app::api::repository::ProductRepository;
    use nutrition_search::web_app::config::Config;
    use nutrition_search::web_app::handlers;
    use tracing_subscriber::EnvFilter;

    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let config = Config::load();
    let repository = build_repository(&config).await?;
    let repository: web::Data<dyn ProductRepository> = web::Data::from(repository);

    let address = config.bind_address();
    tracing::info!("Starting server at http://{}", address);

    HttpServer::new(move || {
        App::new()
            .app_data(repository.clone())
            .configure(handlers::configure)
    })
    .bind(&address)?
    .run()
    .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Pick the repository: Postgres when configured and compiled in, the JSON
/// catalog file otherwise.
#[cfg(feature = "web")]
async fn build_repository(
    config: &nutrition_search::web_app::config::Config,
) -> anyhow::Result<std::sync::Arc<dyn nutrition_search::web_app::api::repository::ProductRepository>> {
    use anyhow::Context;
    use nutrition_search::web_app::api::repository::InMemoryRepository;
    use std::sync::Arc;

    #[cfg(feature = "db-tools")]
    if let Some(database_url) = &config.database_url {
        use nutrition_search::web_app::api::db::{self, PgRepository, DEFAULT_SCHEMA};

        let pool = db::create_pool(database_url, config.db_max_connections)
            .await
            .context("Failed to create connection pool")?;
        db::migrate(&pool, DEFAULT_SCHEMA).await?;

        // Seed database if empty
        if db::product_count(&pool, DEFAULT_SCHEMA).await? == 0 {
            tracing::info!("Database is empty, seeding from {}", config.catalog_path.display());
            let seed = InMemoryRepository::from_path(&config.catalog_path)?;
            db::seed_catalog(&pool, DEFAULT_SCHEMA, seed.catalog()).await?;
        }

        return Ok(Arc::new(PgRepository::new(pool)));
    }

    #[cfg(not(feature = "db-tools"))]
    if config.database_url.is_some() {
        tracing::warn!("DATABASE_URL is set but the db-tools feature is disabled; serving the catalog file");
    }

    let repository = InMemoryRepository::from_path(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "web"))]
fn main() {
    panic!("This binary requires the 'web' feature. Run with: cargo run --features web");
}
