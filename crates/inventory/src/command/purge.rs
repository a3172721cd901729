use fridgekit_shared::Store;
use time::Date;

use crate::{ITEMS, InventoryItem, days_until};

/// Keeps undated items and those expiring today or later.
pub fn retain_unexpired(items: &mut Vec<InventoryItem>, today: Date) -> usize {
    let before = items.len();
    items.retain(|item| days_until(item.expiry, today).is_none_or(|days| days >= 0));

    before - items.len()
}

impl<S: Store> super::Command<S> {
    /// Drops expired items when the auto-delete setting is on.
    ///
    /// Idempotent for a given day; returns how many items were removed.
    #[tracing::instrument(skip(self))]
    pub async fn purge_expired_if_enabled(&self) -> fridgekit_shared::Result<usize> {
        let settings = fridgekit_settings::load(&self.store).await?;
        if !settings.auto_delete_expired {
            return Ok(0);
        }

        self.purge_expired().await
    }

    /// Drops expired items regardless of settings.
    pub async fn purge_expired(&self) -> fridgekit_shared::Result<usize> {
        let mut items = self.list().await?;
        let removed = retain_unexpired(&mut items, self.clock.today());
        if removed == 0 {
            return Ok(0);
        }

        ITEMS.save(&self.store, &items).await?;
        tracing::info!(removed, "purged expired inventory items");

        Ok(removed)
    }
}
