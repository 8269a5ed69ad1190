//! Catalog management use case.

use coiffe_core::catalog::{CatalogRepository, Product, sample_products};
use coiffe_core::error::{CoiffeError, Result};
use coiffe_core::validation::ProductForm;
use std::sync::Arc;
use tracing::info;

pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        let mut products = self.repository.list_all().await?;
        products.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        Ok(products)
    }

    /// Fails with `NotFound` for an unknown id.
    pub async fn get(&self, id: &str) -> Result<Product> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| CoiffeError::not_found("product", id))
    }

    pub async fn create(&self, form: &ProductForm) -> Result<Product> {
        let product = form.validate().map_err(CoiffeError::from)?;
        let id = self.repository.add(&product).await?;
        Ok(product.with_id(id))
    }

    pub async fn update(&self, id: &str, form: &ProductForm) -> Result<Product> {
        let product = form.validate().map_err(CoiffeError::from)?;
        self.repository.update(id, &product).await?;
        Ok(product.with_id(id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await
    }

    /// Inserts the sample products when the catalog is empty.
    ///
    /// Returns how many products were inserted (zero if the catalog already
    /// had content).
    pub async fn seed_if_empty(&self) -> Result<usize> {
        if !self.repository.list_all().await?.is_empty() {
            return Ok(0);
        }

        let samples = sample_products();
        for product in &samples {
            self.repository.add(product).await?;
        }
        info!(count = samples.len(), "Seeded empty catalog with sample products");
        Ok(samples.len())
    }
}
