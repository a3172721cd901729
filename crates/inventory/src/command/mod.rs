mod add;
mod delete;
mod edit;
mod purge;

pub use add::ItemInput;
pub use purge::retain_unexpired;

use fridgekit_shared::{State, Store};
use std::ops::Deref;

use crate::{ITEMS, InventoryItem, SORT_BY, SortBy};

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

    /// Stored items in insertion order.
    pub async fn list(&self) -> fridgekit_shared::Result<Vec<InventoryItem>> {
        ITEMS.load_or_default(&self.store).await
    }

    pub async fn find(&self, id: &str) -> fridgekit_shared::Result<Option<InventoryItem>> {
        Ok(self.list().await?.into_iter().find(|item| item.id == id))
    }

    pub async fn sort_by(&self) -> fridgekit_shared::Result<SortBy> {
        SORT_BY.load(&self.store).await
    }

    pub async fn set_sort_by(&self, sort_by: SortBy) -> fridgekit_shared::Result<()> {
        SORT_BY.save(&self.store, &sort_by).await
    }
}
