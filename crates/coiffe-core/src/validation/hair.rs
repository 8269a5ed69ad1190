//! Hair information form rules.

use super::{ValidationErrors, non_blank};
use crate::user::HairProfileUpdate;

/// Input of the hair information form.
#[derive(Debug, Clone, Default)]
pub struct HairInfoForm {
    pub hair_style: String,
    pub hair_quality: String,
    pub hair_length: String,
    pub hair_color: String,
    pub hair_texture: String,
    pub hair_concerns: String,
}

impl HairInfoForm {
    /// Validates the form and converts it into a field-level profile update.
    ///
    /// All six fields are written; blank concerns clear the stored value.
    pub fn validate(&self) -> Result<HairProfileUpdate, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match non_blank(&self.hair_style) {
            None => errors.add("hair_style", "Hair style is required"),
            Some(style) if style.chars().count() < 2 => {
                errors.add("hair_style", "Hair style must be at least 2 characters")
            }
            Some(_) => {}
        }
        if non_blank(&self.hair_quality).is_none() {
            errors.add("hair_quality", "Hair quality is required");
        }
        if non_blank(&self.hair_length).is_none() {
            errors.add("hair_length", "Hair length is required");
        }
        if non_blank(&self.hair_color).is_none() {
            errors.add("hair_color", "Hair color is required");
        }
        if non_blank(&self.hair_texture).is_none() {
            errors.add("hair_texture", "Hair texture is required");
        }
        if let Some(concerns) = non_blank(&self.hair_concerns) {
            if concerns.chars().count() < 3 {
                errors.add(
                    "hair_concerns",
                    "If provided, concerns should be at least 3 characters",
                );
            }
        }

        errors.into_result(HairProfileUpdate {
            full_name: None,
            hair_style: Some(self.hair_style.trim().to_string()),
            hair_quality: Some(self.hair_quality.trim().to_string()),
            hair_length: Some(self.hair_length.trim().to_string()),
            hair_color: Some(self.hair_color.trim().to_string()),
            hair_texture: Some(self.hair_texture.trim().to_string()),
            hair_concerns: Some(self.hair_concerns.trim().to_string()),
        })
    }
}
