//! Product domain model.

use serde::{Deserialize, Serialize};

/// A product of the catalog.
///
/// The identifier is owned by the store: it is never part of the stored
/// payload and is re-attached from the document key when a product is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "stockAmount")]
    pub stock_amount: u32,
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
}

impl Product {
    /// Returns a copy carrying the store-assigned identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Stock label used in listings and prompt text.
    pub fn availability_label(&self) -> &'static str {
        if self.is_available { "In stock" } else { "Out of stock" }
    }
}
