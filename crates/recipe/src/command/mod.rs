mod add;
mod delete;
mod edit;

pub use add::RecipeInput;

use fridgekit_shared::{State, Store};
use std::ops::Deref;

use crate::{Recipe, USER_RECIPES};

#[derive(Clone)]
pub struct Command<S: Store> {
    state: State<S>,
}

impl<S: Store> Deref for Command<S> {
    type Target = State<S>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl<S: Store> Command<S> {
    pub fn new(state: State<S>) -> Self {
        Self { state }
    }

    /// User-authored recipes in insertion order.
    pub async fn user_recipes(&self) -> fridgekit_shared::Result<Vec<Recipe>> {
        USER_RECIPES.load_or_default(&self.store).await
    }

    /// First user-authored recipe with the exact `name`.
    pub async fn find_user_recipe(&self, name: &str) -> fridgekit_shared::Result<Option<Recipe>> {
        Ok(self
            .user_recipes()
            .await?
            .into_iter()
            .find(|recipe| recipe.name == name))
    }
}
