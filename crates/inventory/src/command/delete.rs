use fridgekit_shared::Store;

use crate::ITEMS;

impl<S: Store> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> fridgekit_shared::Result<bool> {
        let mut items = self.list().await?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            tracing::debug!(id, "inventory item not found, nothing to delete");

            return Ok(false);
        }

        ITEMS.save(&self.store, &items).await?;

        Ok(true)
    }
}
