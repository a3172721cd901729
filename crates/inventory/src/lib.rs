mod command;
mod expiry;
mod query;
mod types;

pub use command::*;
pub use expiry::*;
pub use query::*;
pub use types::*;

use fridgekit_shared::{Collection, Preference};

pub const INVENTORY_KEY: &str = "kitchenIngredients";
pub const SORT_KEY: &str = "ingredientSortBy";

pub(crate) const ITEMS: Collection<InventoryItem> = Collection::new(INVENTORY_KEY);
pub(crate) const SORT_BY: Preference<SortBy> = Preference::new(SORT_KEY);
