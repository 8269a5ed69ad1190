//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs describe the on-disk layout of the TOML stores. They are
//! private to the infrastructure layer; repositories convert them to and
//! from the domain models.
//!
//! Each document carries a `version` so the layout can evolve. Only
//! **1.0.0** exists so far.

use chrono::{DateTime, Utc};
use coiffe_core::catalog::Product;
use coiffe_core::user::UserRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: &str = "1.0.0";

fn schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

// ============================================================================
// Profile store
// ============================================================================

/// A user record as stored under its user id key.
///
/// The id itself is the table key and is not repeated inside the entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub hair_style: Option<String>,
    #[serde(default)]
    pub hair_quality: Option<String>,
    #[serde(default)]
    pub hair_length: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub hair_texture: Option<String>,
    #[serde(default)]
    pub hair_concerns: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredUser {
    /// Convert DTO to domain model, re-attaching the key.
    pub fn into_domain(self, user_id: &str) -> UserRecord {
        UserRecord {
            user_id: user_id.to_string(),
            email: self.email,
            full_name: self.full_name,
            phone_number: self.phone_number,
            role: self.role,
            hair_style: self.hair_style,
            hair_quality: self.hair_quality,
            hair_length: self.hair_length,
            hair_color: self.hair_color,
            hair_texture: self.hair_texture,
            hair_concerns: self.hair_concerns,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&UserRecord> for StoredUser {
    fn from(record: &UserRecord) -> Self {
        StoredUser {
            email: record.email.clone(),
            full_name: record.full_name.clone(),
            phone_number: record.phone_number.clone(),
            role: record.role.clone(),
            hair_style: record.hair_style.clone(),
            hair_quality: record.hair_quality.clone(),
            hair_length: record.hair_length.clone(),
            hair_color: record.hair_color.clone(),
            hair_texture: record.hair_texture.clone(),
            hair_concerns: record.hair_concerns.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Root of `profiles.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesDocument {
    #[serde(default = "schema_version")]
    pub version: String,
    #[serde(default)]
    pub users: BTreeMap<String, StoredUser>,
}

impl Default for ProfilesDocument {
    fn default() -> Self {
        Self {
            version: schema_version(),
            users: BTreeMap::new(),
        }
    }
}

// ============================================================================
// Catalog store
// ============================================================================

/// Root of `catalog.toml`.
///
/// Products are keyed by id; the serialized product omits its own id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "schema_version")]
    pub version: String,
    #[serde(default)]
    pub products: BTreeMap<String, Product>,
}

impl Default for CatalogDocument {
    fn default() -> Self {
        Self {
            version: schema_version(),
            products: BTreeMap::new(),
        }
    }
}

// ============================================================================
// Account store
// ============================================================================

/// Credentials of one local account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEntry {
    pub user_id: String,
    pub salt: String,
    /// Hex SHA-256 of `salt + password`.
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

/// Root of `accounts.toml`, keyed by normalized email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsDocument {
    #[serde(default = "schema_version")]
    pub version: String,
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountEntry>,
}

impl Default for AccountsDocument {
    fn default() -> Self {
        Self {
            version: schema_version(),
            accounts: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_document_omits_product_id() {
        let mut doc = CatalogDocument::default();
        let product = Product {
            id: "should-not-be-written".to_string(),
            name: "Silk Serum".to_string(),
            description: "Smooths frizz".to_string(),
            price: 24.5,
            stock_amount: 3,
            category: "Treatment".to_string(),
            brand: String::new(),
            image_url: String::new(),
            is_available: true,
        };
        doc.products.insert("p-1".to_string(), product);

        let text = toml::to_string_pretty(&doc).unwrap();
        assert!(!text.contains("should-not-be-written"));
        assert!(text.contains("stockAmount = 3"));
        assert!(text.contains("isAvailable = true"));

        let back: CatalogDocument = toml::from_str(&text).unwrap();
        assert_eq!(back.products["p-1"].id, "");
        assert_eq!(back.products["p-1"].name, "Silk Serum");
    }

    #[test]
    fn test_stored_user_round_trip_keeps_key_outside() {
        let record = UserRecord::new("uid-7", "an@example.com", "An", "0901234567");
        let stored = StoredUser::from(&record);
        let text = toml::to_string(&stored).unwrap();
        assert!(text.contains("fullName"));
        assert!(!text.contains("uid-7"));

        let parsed: StoredUser = toml::from_str(&text).unwrap();
        assert_eq!(parsed.into_domain("uid-7"), record);
    }
}
