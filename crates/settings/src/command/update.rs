use fridgekit_shared::{CookingLevel, Store};
use validator::Validate;

use crate::{SETTINGS, Settings, Theme};

#[derive(Validate, Debug, Clone)]
pub struct UpdateInput {
    pub theme: Theme,
    #[validate(length(max = 40))]
    pub user_name: String,
    pub auto_delete_expired: bool,
    pub cooking_level: CookingLevel,
    #[validate(range(max = 365))]
    pub soon_days: u32,
}

impl<S: Store> super::Command<S> {
    /// Replaces the form-editable fields; allergies are kept.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, input: UpdateInput) -> fridgekit_shared::Result<Settings> {
        let input = UpdateInput {
            user_name: input.user_name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let current = self.load().await?;
        let settings = Settings {
            theme: input.theme,
            user_name: input.user_name,
            auto_delete_expired: input.auto_delete_expired,
            cooking_level: input.cooking_level,
            soon_days: input.soon_days,
            allergies: current.allergies,
        };

        SETTINGS.save(&self.store, &settings).await?;

        Ok(settings)
    }
}
