//! Client-side input validation.
//!
//! Every form in the application is checked here before anything reaches a
//! store or the authentication provider. Rules report one message per field
//! (the first rule that fails), mirroring how the forms display errors next to
//! each input.
//!
//! # Module Structure
//!
//! - `account`: registration and login forms
//! - `hair`: hair information form
//! - `product`: product create/edit form

mod account;
mod hair;
mod product;

pub use account::{LoginForm, RegistrationForm};
pub use hair::HairInfoForm;
pub use product::{PRODUCT_CATEGORIES, ProductForm};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field name (e.g. `"email"`, `"price"`).
    pub field: String,
    /// Human-readable message shown next to the field.
    pub message: String,
}

/// Collected field errors of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Convenience constructor for a single-field failure.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

/// Returns `true` when a chat message carries no content once trimmed.
///
/// Blank chat input is dropped silently; it never becomes an error.
pub fn is_blank_message(text: &str) -> bool {
    text.trim().is_empty()
}

/// Trims a form input, mapping blank values to `None`.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
