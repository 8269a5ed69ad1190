//! Product catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Product domain model
//! - `repository`: Catalog store trait
//! - `samples`: Starter catalog used to seed an empty store

mod model;
mod repository;
mod samples;

pub use model::Product;
pub use repository::CatalogRepository;
pub use samples::sample_products;
