//! User domain module.
//!
//! This module contains the stored user record, the hair profile snapshot
//! derived from it, and the profile store trait.
//!
//! # Module Structure
//!
//! - `model`: `UserRecord`, `HairProfile`, `HairProfileUpdate`
//! - `repository`: `ProfileRepository` trait
//!
//! # Usage
//!
//! ```ignore
//! use coiffe_core::user::{HairProfile, ProfileRepository, UserRecord};
//! ```

mod model;
mod repository;

// Re-export public API
pub use model::{DEFAULT_ROLE, HairProfile, HairProfileUpdate, NOT_SET, UserRecord};
pub use repository::ProfileRepository;
