use fridgekit_shared::Store;

use super::NameInput;
use crate::ShoppingItem;

impl<S: Store> super::Command<S> {
    /// `None` when the list no longer exists.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(
        &self,
        list_id: &str,
        name: &str,
    ) -> fridgekit_shared::Result<Option<ShoppingItem>> {
        let name = NameInput::parse(name)?;

        self.update_list(list_id, |list, now| {
            let item = ShoppingItem {
                id: fridgekit_shared::new_id(),
                name,
                crossed: false,
                added_at: now,
            };
            list.items.push(item.clone());
            Some(item)
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn edit_item(
        &self,
        list_id: &str,
        item_id: &str,
        name: &str,
    ) -> fridgekit_shared::Result<Option<ShoppingItem>> {
        let name = NameInput::parse(name)?;

        self.update_list(list_id, |list, _| {
            let item = list.item_mut(item_id)?;
            item.name = name;
            Some(item.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, list_id: &str, item_id: &str) -> fridgekit_shared::Result<bool> {
        let deleted = self
            .update_list(list_id, |list, _| {
                let before = list.items.len();
                list.items.retain(|item| item.id != item_id);
                (list.items.len() != before).then_some(())
            })
            .await?;

        Ok(deleted.is_some())
    }
}
