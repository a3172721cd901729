use std::cmp::Ordering;

use feruca::Collator;
use fridgekit_shared::Store;
use time::Date;

use crate::{ExpiryStatus, InventoryItem, SortBy, badge, classify, days_until};

pub struct InventoryView {
    pub header: String,
    pub count_text: String,
    pub rows: Vec<ItemRow>,
}

impl InventoryView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct ItemRow {
    pub item: InventoryItem,
    pub days_until: Option<i64>,
    pub status: ExpiryStatus,
    pub badge: String,
}

pub fn sort_items(items: &mut [InventoryItem], sort_by: SortBy) {
    match sort_by {
        SortBy::Expiry => items.sort_by(|a, b| {
            compare_expiry(a.expiry, b.expiry).then_with(|| b.added_at.cmp(&a.added_at))
        }),
        SortBy::Added => items.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        SortBy::Name => {
            // Unicode collation with root tailoring, accents sort beside their base letter
            let mut collator = Collator::default();
            items.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
    }
}

fn compare_expiry(a: Option<Date>, b: Option<Date>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn count_text(count: usize) -> String {
    if count == 1 {
        "Refrigerator has 1 item".to_owned()
    } else {
        format!("Refrigerator has {count} items")
    }
}

impl<S: Store> crate::Command<S> {
    /// Purges (when enabled), then reads, sorts and classifies the inventory.
    pub async fn view(&self) -> fridgekit_shared::Result<InventoryView> {
        self.purge_expired_if_enabled().await?;

        let settings = fridgekit_settings::load(&self.store).await?;
        let sort_by = self.sort_by().await?;
        let today = self.clock.today();

        let mut items = self.list().await?;
        sort_items(&mut items, sort_by);

        let rows = items
            .into_iter()
            .map(|item| {
                let days = days_until(item.expiry, today);
                ItemRow {
                    status: classify(days, settings.soon_days),
                    badge: badge(days),
                    days_until: days,
                    item,
                }
            })
            .collect::<Vec<_>>();

        Ok(InventoryView {
            header: settings.inventory_header(),
            count_text: count_text(rows.len()),
            rows,
        })
    }
}
