use fridgekit_shared::Store;

use crate::USER_RECIPES;

impl<S: Store> super::Command<S> {
    /// Removes the first user recipe named `name`.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> fridgekit_shared::Result<bool> {
        let mut recipes = self.user_recipes().await?;
        let Some(pos) = recipes.iter().position(|r| r.name == name) else {
            return Ok(false);
        };

        recipes.remove(pos);
        USER_RECIPES.save(&self.store, &recipes).await?;

        Ok(true)
    }
}
