//! Catalog store trait.

use super::model::Product;
use crate::error::Result;

/// An abstract store for the product catalog.
///
/// Implementations own identifier assignment: `add` ignores `product.id`
/// and returns the key under which the product was stored.
#[async_trait::async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists every product, each carrying its store key as `id`.
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// Finds a product by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))`: Product found
    /// - `Ok(None)`: No product stored under `id`
    async fn get(&self, id: &str) -> Result<Option<Product>>;

    /// Inserts a product and returns its newly assigned id.
    async fn add(&self, product: &Product) -> Result<String>;

    /// Replaces the product stored under `id`.
    ///
    /// Fails with `NotFound` when `id` is unknown.
    async fn update(&self, id: &str, product: &Product) -> Result<()>;

    /// Removes the product stored under `id`.
    ///
    /// Fails with `NotFound` when `id` is unknown.
    async fn delete(&self, id: &str) -> Result<()>;
}
