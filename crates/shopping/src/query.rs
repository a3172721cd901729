use fridgekit_shared::Store;

use crate::{ShoppingItem, ShoppingList};

/// What the shopping page is showing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Overview,
    List(String),
}

pub struct ListSummary {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub item_count: usize,
    pub badge: String,
}

pub struct Overview {
    pub count_text: String,
    pub lists: Vec<ListSummary>,
}

pub struct ListDetail {
    pub id: String,
    pub name: String,
    pub count_text: String,
    pub items: Vec<ShoppingItem>,
}

fn item_badge(count: usize) -> String {
    if count == 1 {
        "1 item".to_owned()
    } else {
        format!("{count} items")
    }
}

fn lists_count_text(count: usize) -> String {
    if count == 1 {
        "You have 1 shopping list".to_owned()
    } else {
        format!("You have {count} shopping lists")
    }
}

fn items_count_text(count: usize) -> String {
    if count == 1 {
        "This list has 1 item".to_owned()
    } else {
        format!("This list has {count} items")
    }
}

impl ListDetail {
    fn from_list(list: ShoppingList) -> Self {
        let mut items = list.items;
        items.sort_by(|a, b| b.added_at.cmp(&a.added_at));

        Self {
            id: list.id,
            name: list.name,
            count_text: items_count_text(items.len()),
            items,
        }
    }
}

impl<S: Store> crate::Command<S> {
    /// All lists, newest first.
    pub async fn overview(&self) -> fridgekit_shared::Result<Overview> {
        let mut lists = self.lists().await?;
        lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let lists = lists
            .into_iter()
            .map(|list| ListSummary {
                item_count: list.items.len(),
                badge: item_badge(list.items.len()),
                id: list.id,
                name: list.name,
                created_at: list.created_at,
            })
            .collect::<Vec<_>>();

        Ok(Overview {
            count_text: lists_count_text(lists.len()),
            lists,
        })
    }

    /// Items of one list, newest first; `None` when the list is gone.
    pub async fn detail(&self, list_id: &str) -> fridgekit_shared::Result<Option<ListDetail>> {
        Ok(self.find_list(list_id).await?.map(ListDetail::from_list))
    }

    /// Falls back to the overview when the list behind `view` is gone.
    pub async fn resolve(&self, view: View) -> fridgekit_shared::Result<View> {
        match view {
            View::List(id) if self.find_list(&id).await?.is_some() => Ok(View::List(id)),
            _ => Ok(View::Overview),
        }
    }
}
