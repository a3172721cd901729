use fridgekit_shared::{CookingLevel, Store};
use validator::Validate;

use crate::{Recipe, USER_RECIPES, parse_ingredients, parse_steps};

/// Raw form fields: ingredients comma separated, one step per line.
#[derive(Debug, Clone)]
pub struct RecipeInput {
    pub name: String,
    pub level: CookingLevel,
    pub ingredients: String,
    pub steps: String,
}

#[derive(Validate)]
struct ValidRecipe {
    #[validate(length(min = 1, max = 80))]
    name: String,
    level: CookingLevel,
    #[validate(length(min = 1))]
    ingredients: Vec<String>,
    #[validate(length(min = 1))]
    steps: Vec<String>,
}

impl RecipeInput {
    pub(crate) fn into_recipe(self) -> fridgekit_shared::Result<Recipe> {
        let valid = ValidRecipe {
            name: self.name.trim().to_owned(),
            level: self.level,
            ingredients: parse_ingredients(&self.ingredients),
            steps: parse_steps(&self.steps),
        };
        valid.validate()?;

        Ok(Recipe {
            name: valid.name,
            level: valid.level,
            ingredients: valid.ingredients,
            steps: valid.steps,
        })
    }
}

impl<S: Store> super::Command<S> {
    /// Appends to the user overlay. Names are not checked for uniqueness.
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, input: RecipeInput) -> fridgekit_shared::Result<Recipe> {
        let recipe = input.into_recipe()?;

        let mut recipes = self.user_recipes().await?;
        recipes.push(recipe.clone());
        USER_RECIPES.save(&self.store, &recipes).await?;

        Ok(recipe)
    }
}
