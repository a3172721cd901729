use fridgekit_shared::Store;

use crate::{Recipe, RecipeInput, USER_RECIPES};

impl<S: Store> super::Command<S> {
    /// Replaces the first user recipe named `name`; `None` when there is
    /// no such user recipe (built-ins are never matched).
    #[tracing::instrument(skip(self))]
    pub async fn edit(
        &self,
        name: &str,
        input: RecipeInput,
    ) -> fridgekit_shared::Result<Option<Recipe>> {
        let recipe = input.into_recipe()?;

        let mut recipes = self.user_recipes().await?;
        let Some(current) = recipes.iter_mut().find(|r| r.name == name) else {
            tracing::debug!(name, "user recipe not found, nothing to edit");

            return Ok(None);
        };

        *current = recipe.clone();
        USER_RECIPES.save(&self.store, &recipes).await?;

        Ok(Some(recipe))
    }
}
