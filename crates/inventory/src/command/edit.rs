use fridgekit_shared::Store;

use crate::{ITEMS, InventoryItem, ItemInput};

impl<S: Store> super::Command<S> {
    /// Replaces name, qty and expiry; `None` when the item is gone.
    #[tracing::instrument(skip(self))]
    pub async fn edit(
        &self,
        id: &str,
        input: ItemInput,
    ) -> fridgekit_shared::Result<Option<InventoryItem>> {
        let valid = input.normalize()?;

        let mut items = self.list().await?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(id, "inventory item not found, nothing to edit");

            return Ok(None);
        };

        item.name = valid.name;
        item.qty = valid.qty;
        item.expiry = valid.expiry;
        item.updated_at = Some(self.clock.now_millis());
        let edited = item.clone();

        ITEMS.save(&self.store, &items).await?;

        Ok(Some(edited))
    }
}
