//! User record and hair profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role assigned to self-registered accounts.
pub const DEFAULT_ROLE: &str = "user";

/// Placeholder shown for an attribute that has not been recorded.
pub const NOT_SET: &str = "Not set";

/// Hair attributes of one user, each optionally absent.
///
/// This is the immutable snapshot a consultation session works from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairProfile {
    pub full_name: Option<String>,
    pub hair_style: Option<String>,
    pub hair_quality: Option<String>,
    pub hair_length: Option<String>,
    pub hair_color: Option<String>,
    pub hair_texture: Option<String>,
    pub hair_concerns: Option<String>,
}

impl HairProfile {
    /// `true` once at least one hair attribute has been recorded.
    pub fn has_hair_details(&self) -> bool {
        [
            &self.hair_style,
            &self.hair_quality,
            &self.hair_length,
            &self.hair_color,
            &self.hair_texture,
            &self.hair_concerns,
        ]
        .iter()
        .any(|field| field.is_some())
    }

    /// Labeled values in display order, absent ones rendered as [`NOT_SET`].
    pub fn display_fields(&self) -> [(&'static str, &str); 7] {
        fn show(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or(NOT_SET)
        }
        [
            ("Name", show(&self.full_name)),
            ("Hair style", show(&self.hair_style)),
            ("Hair quality", show(&self.hair_quality)),
            ("Hair length", show(&self.hair_length)),
            ("Hair color", show(&self.hair_color)),
            ("Hair texture", show(&self.hair_texture)),
            ("Hair concerns", show(&self.hair_concerns)),
        ]
    }
}

/// Field-level update of a stored profile.
///
/// `None` leaves a field untouched, `Some(value)` overwrites it and a blank
/// value clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairProfileUpdate {
    pub full_name: Option<String>,
    pub hair_style: Option<String>,
    pub hair_quality: Option<String>,
    pub hair_length: Option<String>,
    pub hair_color: Option<String>,
    pub hair_texture: Option<String>,
    pub hair_concerns: Option<String>,
}

/// The record kept by the profile store for each user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
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

impl UserRecord {
    /// Creates the record written right after registration.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            email: email.into(),
            full_name: Some(full_name.into()),
            phone_number: Some(phone_number.into()),
            role: Some(DEFAULT_ROLE.to_string()),
            hair_style: None,
            hair_quality: None,
            hair_length: None,
            hair_color: None,
            hair_texture: None,
            hair_concerns: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Snapshot of the hair attributes used for consultation prompts.
    pub fn hair_profile(&self) -> HairProfile {
        HairProfile {
            full_name: self.full_name.clone(),
            hair_style: self.hair_style.clone(),
            hair_quality: self.hair_quality.clone(),
            hair_length: self.hair_length.clone(),
            hair_color: self.hair_color.clone(),
            hair_texture: self.hair_texture.clone(),
            hair_concerns: self.hair_concerns.clone(),
        }
    }

    /// Applies a field-level update and bumps `updated_at`.
    pub fn apply(&mut self, update: &HairProfileUpdate) {
        fn merge(target: &mut Option<String>, value: &Option<String>) {
            if let Some(value) = value {
                let trimmed = value.trim();
                *target = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
        }

        merge(&mut self.full_name, &update.full_name);
        merge(&mut self.hair_style, &update.hair_style);
        merge(&mut self.hair_quality, &update.hair_quality);
        merge(&mut self.hair_length, &update.hair_length);
        merge(&mut self.hair_color, &update.hair_color);
        merge(&mut self.hair_texture, &update.hair_texture);
        merge(&mut self.hair_concerns, &update.hair_concerns);
        self.updated_at = Utc::now();
    }
}
