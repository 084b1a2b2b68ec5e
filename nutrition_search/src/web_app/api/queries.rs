// web_app/api/queries.rs - Catalog queries
//
// Thin async functions combining a repository with the filter engine.
// Philosophy: take a repository and parameters, return typed results.
// Missing records become `AppError::NotFound` here and nowhere else.

use crate::web_app::api::filter;
use crate::web_app::api::repository::ProductRepository;
use crate::web_app::error::{AppError, Result};
use crate::web_app::favorites::FavoriteSet;
use crate::web_app::model::*;

/// Run a product search
///
/// Categorical filters narrow the snapshot fetched from the repository;
/// the engine then applies the full query (categorical filters included)
/// so the result does not depend on how the repository prefiltered.
pub async fn search_products(repo: &dyn ProductRepository, query: &SearchQuery) -> Result<Vec<Product>> {
    tracing::debug!("Search request: {:?}", query);

    let snapshot = match (query.franchise_id, query.category_id) {
        (Some(franchise_id), _) => repo.list_products_by_franchise(franchise_id).await?,
        (None, Some(category_id)) => repo.list_products_by_category(category_id).await?,
        (None, None) => repo.list_products().await?,
    };

    let franchises = if query.text_term().is_some() {
        repo.list_franchises().await?
    } else {
        Vec::new()
    };

    let scanned = snapshot.len();
    let results = filter::filter_products(snapshot, &franchises, query);

    tracing::info!("Search matched {} of {} products", results.len(), scanned);
    Ok(results)
}

/// Product listing, optionally narrowed by franchise and/or category
pub async fn list_products(repo: &dyn ProductRepository, query: &SearchQuery) -> Result<Vec<Product>> {
    let categorical = SearchQuery {
        category_id: query.category_id,
        franchise_id: query.franchise_id,
        ..SearchQuery::default()
    };
    search_products(repo, &categorical).await
}

/// Product with its allergens resolved and per-serving totals computed
///
/// Allergen ids without a matching record are dropped from the detail.
pub async fn get_product_detail(repo: &dyn ProductRepository, id: i32) -> Result<ProductDetail> {
    let product = repo
        .get_product(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product", id))?;

    let mut allergen_details = Vec::with_capacity(product.allergens.len());
    for allergen_id in &product.allergens {
        match repo.get_allergen(*allergen_id).await? {
            Some(allergen) => allergen_details.push(allergen),
            None => tracing::warn!("Product {} references unknown allergen {}", id, allergen_id),
        }
    }

    Ok(ProductDetail {
        total_nutrition: NutritionTotals::for_serving(&product),
        product,
        allergen_details,
    })
}

pub async fn list_categories(repo: &dyn ProductRepository) -> Result<Vec<Category>> {
    repo.list_categories().await
}

pub async fn get_category(repo: &dyn ProductRepository, id: i32) -> Result<Category> {
    repo.get_category(id)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))
}

pub async fn list_franchises(repo: &dyn ProductRepository, category_id: Option<i32>) -> Result<Vec<Franchise>> {
    match category_id {
        Some(category_id) => repo.list_franchises_by_category(category_id).await,
        None => repo.list_franchises().await,
    }
}

pub async fn get_franchise(repo: &dyn ProductRepository, id: i32) -> Result<Franchise> {
    repo.get_franchise(id)
        .await?
        .ok_or_else(|| AppError::not_found("Franchise", id))
}

pub async fn list_allergens(repo: &dyn ProductRepository) -> Result<Vec<Allergen>> {
    repo.list_allergens().await
}

pub async fn get_allergen(repo: &dyn ProductRepository, id: i32) -> Result<Allergen> {
    repo.get_allergen(id)
        .await?
        .ok_or_else(|| AppError::not_found("Allergen", id))
}

/// Products behind a favorites list, in favorites order
///
/// Favorites pointing at products that no longer exist are skipped.
pub async fn resolve_favorites(repo: &dyn ProductRepository, favorites: &FavoriteSet) -> Result<Vec<Product>> {
    let mut products = Vec::with_capacity(favorites.len());
    for id in favorites.list() {
        match repo.get_product(*id).await? {
            Some(product) => products.push(product),
            None => tracing::debug!("Favorite {} no longer in catalog", id),
        }
    }
    Ok(products)
}
