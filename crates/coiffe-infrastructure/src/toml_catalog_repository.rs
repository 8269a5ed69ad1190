//! TOML-based CatalogRepository implementation

use crate::dto::CatalogDocument;
use crate::paths::CoiffePaths;
use crate::storage::AtomicTomlFile;
use coiffe_core::catalog::{CatalogRepository, Product};
use coiffe_core::error::{CoiffeError, Result};
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

/// A repository storing the product catalog in `catalog.toml`.
///
/// Products are keyed by a generated UUID. The key is stripped from the
/// payload on write and re-attached as `Product::id` on read.
pub struct TomlCatalogRepository {
    file: AtomicTomlFile<CatalogDocument>,
}

impl TomlCatalogRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn from_paths(paths: &CoiffePaths) -> Self {
        Self::new(paths.catalog_file())
    }
}

#[async_trait::async_trait]
impl CatalogRepository for TomlCatalogRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let doc = self.file.load_or_default()?;
        Ok(doc
            .products
            .into_iter()
            .map(|(id, product)| product.with_id(id))
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let mut doc = self.file.load_or_default()?;
        Ok(doc.products.remove(id).map(|product| product.with_id(id)))
    }

    async fn add(&self, product: &Product) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.file.update(|doc: &mut CatalogDocument| {
            doc.products.insert(id.clone(), product.clone());
            Ok::<_, CoiffeError>(())
        })?;
        info!(product_id = %id, name = %product.name, "Added product");
        Ok(id)
    }

    async fn update(&self, id: &str, product: &Product) -> Result<()> {
        self.file.update(|doc: &mut CatalogDocument| {
            let slot = doc
                .products
                .get_mut(id)
                .ok_or_else(|| CoiffeError::not_found("product", id))?;
            *slot = product.clone();
            Ok::<_, CoiffeError>(())
        })?;
        debug!(product_id = id, "Updated product");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.file.update(|doc: &mut CatalogDocument| {
            doc.products
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| CoiffeError::not_found("product", id))
        })?;
        info!(product_id = id, "Deleted product");
        Ok(())
    }
}
