use fridgekit_shared::Store;

impl<S: Store> super::Command<S> {
    /// Flips the crossed flag and returns the new state.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_item(
        &self,
        list_id: &str,
        item_id: &str,
    ) -> fridgekit_shared::Result<Option<bool>> {
        self.update_list(list_id, |list, _| {
            let item = list.item_mut(item_id)?;
            item.crossed = !item.crossed;
            Some(item.crossed)
        })
        .await
    }
}
