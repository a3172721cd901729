use fridgekit_shared::Store;
use time::Date;
use validator::Validate;

use crate::{ITEMS, InventoryItem, sanitize_qty, truncate_name};

/// Form fields shared by add and edit.
#[derive(Debug, Clone)]
pub struct ItemInput {
    pub name: String,
    pub qty: Option<i64>,
    pub expiry: Option<Date>,
}

#[derive(Validate)]
pub(crate) struct ValidItem {
    #[validate(length(min = 1))]
    pub name: String,
    pub qty: u32,
    pub expiry: Option<Date>,
}

impl ItemInput {
    pub(crate) fn normalize(self) -> fridgekit_shared::Result<ValidItem> {
        let item = ValidItem {
            name: truncate_name(self.name.trim()),
            qty: sanitize_qty(self.qty.map(|q| q as f64)),
            expiry: self.expiry,
        };
        item.validate()?;

        Ok(item)
    }
}

impl<S: Store> super::Command<S> {
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, input: ItemInput) -> fridgekit_shared::Result<InventoryItem> {
        let valid = input.normalize()?;

        let mut items = self.list().await?;
        let item = InventoryItem {
            id: fridgekit_shared::new_id(),
            name: valid.name,
            qty: valid.qty,
            expiry: valid.expiry,
            added_at: self.clock.now_millis(),
            updated_at: None,
        };
        items.push(item.clone());
        ITEMS.save(&self.store, &items).await?;

        Ok(item)
    }
}
