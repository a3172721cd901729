use fridgekit_shared::Store;
use validator::Validate;

use crate::{SETTINGS, normalize_allergy};

#[derive(Validate)]
struct AllergyInput {
    #[validate(length(min = 1, max = 50))]
    name: String,
}

impl<S: Store> super::Command<S> {
    /// Returns `false` when the normalized allergy is already recorded.
    #[tracing::instrument(skip(self))]
    pub async fn add_allergy(&self, allergy: &str) -> fridgekit_shared::Result<bool> {
        let input = AllergyInput {
            name: normalize_allergy(allergy),
        };
        input.validate()?;

        let mut settings = self.load().await?;
        if settings.allergies.contains(&input.name) {
            tracing::debug!(allergy = %input.name, "allergy already recorded");

            return Ok(false);
        }

        settings.allergies.push(input.name);
        SETTINGS.save(&self.store, &settings).await?;

        Ok(true)
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_allergy(&self, allergy: &str) -> fridgekit_shared::Result<bool> {
        let allergy = normalize_allergy(allergy);
        let mut settings = self.load().await?;

        let before = settings.allergies.len();
        settings.allergies.retain(|a| a != &allergy);
        if settings.allergies.len() == before {
            return Ok(false);
        }

        SETTINGS.save(&self.store, &settings).await?;

        Ok(true)
    }
}
