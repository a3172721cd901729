use fridgekit_shared::Store;

use super::NameInput;
use crate::{LISTS, ShoppingList, View};

impl<S: Store> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn create_list(&self, name: &str) -> fridgekit_shared::Result<ShoppingList> {
        let name = NameInput::parse(name)?;

        let mut lists = self.lists().await?;
        let list = ShoppingList {
            id: fridgekit_shared::new_id(),
            name,
            created_at: self.clock.now_millis(),
            items: vec![],
        };
        lists.push(list.clone());
        LISTS.save(&self.store, &lists).await?;

        Ok(list)
    }

    #[tracing::instrument(skip(self))]
    pub async fn rename_list(
        &self,
        id: &str,
        name: &str,
    ) -> fridgekit_shared::Result<Option<ShoppingList>> {
        let name = NameInput::parse(name)?;

        self.update_list(id, |list, _| {
            list.name = name;
            Some(list.clone())
        })
        .await
    }

    /// Deletes the list with all of its items and returns the view to
    /// show next: the overview when `current` was the deleted list.
    #[tracing::instrument(skip(self))]
    pub async fn delete_list(&self, id: &str, current: &View) -> fridgekit_shared::Result<View> {
        let mut lists = self.lists().await?;
        let before = lists.len();
        lists.retain(|list| list.id != id);

        if lists.len() != before {
            LISTS.save(&self.store, &lists).await?;
        } else {
            tracing::debug!(list_id = id, "shopping list not found, nothing to delete");
        }

        Ok(match current {
            View::List(open) if open != id && lists.iter().any(|l| &l.id == open) => {
                View::List(open.clone())
            }
            _ => View::Overview,
        })
    }
}
