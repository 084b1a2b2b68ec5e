// web_app/api/repository.rs - Catalog repository interface
//
// The engine only needs a product snapshot; the other lookups serve the
// listing and detail endpoints. Lookups by id return `Ok(None)` for a
// missing record and leave the NotFound decision to the caller.

use std::path::Path;

use async_trait::async_trait;

use crate::web_app::error::Result;
use crate::web_app::model::{Allergen, Catalog, Category, Franchise, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in the repository's natural (id) order
    async fn list_products(&self) -> Result<Vec<Product>>;

    async fn get_product(&self, id: i32) -> Result<Option<Product>>;

    async fn list_products_by_franchise(&self, franchise_id: i32) -> Result<Vec<Product>>;

    async fn list_products_by_category(&self, category_id: i32) -> Result<Vec<Product>>;

    async fn list_franchises(&self) -> Result<Vec<Franchise>>;

    async fn get_franchise(&self, id: i32) -> Result<Option<Franchise>>;

    async fn list_franchises_by_category(&self, category_id: i32) -> Result<Vec<Franchise>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>>;

    async fn list_allergens(&self) -> Result<Vec<Allergen>>;

    async fn get_allergen(&self, id: i32) -> Result<Option<Allergen>>;
}

/// Repository over an immutable catalog snapshot
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    catalog: Catalog,
}

impl InMemoryRepository {
    pub fn new(mut catalog: Catalog) -> Self {
        catalog.categories.sort_by_key(|c| c.id);
        catalog.franchises.sort_by_key(|f| f.id);
        catalog.allergens.sort_by_key(|a| a.id);
        catalog.products.sort_by_key(|p| p.id);
        Self { catalog }
    }

    /// Load a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(Self::new(catalog))
    }

    /// Load a catalog from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading catalog from {}", path.display());

        let json = std::fs::read_to_string(path)?;
        let repository = Self::from_json_str(&json)?;

        tracing::info!(
            "Catalog loaded: {} categories, {} franchises, {} allergens, {} products",
            repository.catalog.categories.len(),
            repository.catalog.franchises.len(),
            repository.catalog.allergens.len(),
            repository.catalog.products.len()
        );
        Ok(repository)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.catalog.products.clone())
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        Ok(self.catalog.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_products_by_franchise(&self, franchise_id: i32) -> Result<Vec<Product>> {
        Ok(self
            .catalog
            .products
            .iter()
            .filter(|p| p.franchise_id == franchise_id)
            .cloned()
            .collect())
    }

    async fn list_products_by_category(&self, category_id: i32) -> Result<Vec<Product>> {
        Ok(self
            .catalog
            .products
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn list_franchises(&self) -> Result<Vec<Franchise>> {
        Ok(self.catalog.franchises.clone())
    }

    async fn get_franchise(&self, id: i32) -> Result<Option<Franchise>> {
        Ok(self.catalog.franchises.iter().find(|f| f.id == id).cloned())
    }

    async fn list_franchises_by_category(&self, category_id: i32) -> Result<Vec<Franchise>> {
        Ok(self
            .catalog
            .franchises
            .iter()
            .filter(|f| f.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.catalog.categories.clone())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        Ok(self.catalog.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_allergens(&self) -> Result<Vec<Allergen>> {
        Ok(self.catalog.allergens.clone())
    }

    async fn get_allergen(&self, id: i32) -> Result<Option<Allergen>> {
        Ok(self.catalog.allergens.iter().find(|a| a.id == id).cloned())
    }
}
