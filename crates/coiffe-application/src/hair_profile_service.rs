//! Hair information use case.

use coiffe_core::error::{CoiffeError, Result};
use coiffe_core::user::{ProfileRepository, UserRecord};
use coiffe_core::validation::HairInfoForm;
use std::sync::Arc;
use tracing::info;

pub struct HairProfileService {
    profiles: Arc<dyn ProfileRepository>,
}

impl HairProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Current values for prefilling the edit form. A missing record gives
    /// an empty form.
    pub async fn load(&self, user_id: &str) -> Result<HairInfoForm> {
        let Some(record) = self.profiles.get(user_id).await? else {
            return Ok(HairInfoForm::default());
        };
        let value = |field: &Option<String>| field.clone().unwrap_or_default();
        Ok(HairInfoForm {
            hair_style: value(&record.hair_style),
            hair_quality: value(&record.hair_quality),
            hair_length: value(&record.hair_length),
            hair_color: value(&record.hair_color),
            hair_texture: value(&record.hair_texture),
            hair_concerns: value(&record.hair_concerns),
        })
    }

    /// Validates the form and writes the six hair fields.
    pub async fn save(&self, user_id: &str, form: &HairInfoForm) -> Result<UserRecord> {
        let update = form.validate().map_err(CoiffeError::from)?;
        let record = self.profiles.update_hair(user_id, &update).await?;
        info!(user_id, "Hair information saved");
        Ok(record)
    }

    /// Lines of the profile screen; absent values read "Not set".
    pub fn profile_view(record: &UserRecord) -> Vec<(&'static str, String)> {
        let or_not_set = |value: &Option<String>| {
            value
                .clone()
                .unwrap_or_else(|| coiffe_core::user::NOT_SET.to_string())
        };
        let mut lines = vec![
            ("Email", record.email.clone()),
            ("Phone", or_not_set(&record.phone_number)),
            ("Role", or_not_set(&record.role)),
        ];
        lines.extend(
            record
                .hair_profile()
                .display_fields()
                .into_iter()
                .map(|(label, value)| (label, value.to_string())),
        );
        lines
    }
}
