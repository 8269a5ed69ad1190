//! Domain layer of the Coiffe hair consultation client.
//!
//! Holds the models, the collaborator traits the application layer depends
//! on, form validation and the shared error type. Nothing here performs I/O.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod generation;
pub mod user;
pub mod validation;

// Re-export common error type
pub use error::{CoiffeError, Result};
