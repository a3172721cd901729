mod item;
mod list;
mod toggle;

use fridgekit_shared::{State, Store};
use std::ops::Deref;
use validator::Validate;

use crate::{LISTS, ShoppingList};

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

#[derive(Validate)]
pub(crate) struct NameInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl NameInput {
    pub(crate) fn parse(name: &str) -> fridgekit_shared::Result<String> {
        let input = NameInput {
            name: name.trim().to_owned(),
        };
        input.validate()?;

        Ok(input.name)
    }
}

impl<S: Store> Command<S> {
    pub fn new(state: State<S>) -> Self {
        Self { state }
    }

    /// Stored lists in insertion order.
    pub async fn lists(&self) -> fridgekit_shared::Result<Vec<ShoppingList>> {
        LISTS.load_or_default(&self.store).await
    }

    pub async fn find_list(&self, id: &str) -> fridgekit_shared::Result<Option<ShoppingList>> {
        Ok(self.lists().await?.into_iter().find(|list| list.id == id))
    }

    /// Loads, applies `f` to the list with `id` and saves.
    ///
    /// Returns `None` without writing when the list no longer exists or
    /// `f` reports nothing changed.
    pub(crate) async fn update_list<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut ShoppingList, i64) -> Option<T>,
    ) -> fridgekit_shared::Result<Option<T>> {
        let mut lists = self.lists().await?;
        let Some(list) = lists.iter_mut().find(|list| list.id == id) else {
            tracing::debug!(list_id = id, "shopping list not found");

            return Ok(None);
        };

        let Some(out) = f(list, self.clock.now_millis()) else {
            return Ok(None);
        };

        LISTS.save(&self.store, &lists).await?;

        Ok(Some(out))
    }
}
