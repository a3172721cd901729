mod command;
mod query;
mod types;

pub use command::*;
pub use query::*;
pub use types::*;

use fridgekit_shared::Collection;

pub const SHOPPING_KEY: &str = "shoppingListsV1";

pub(crate) const LISTS: Collection<ShoppingList> = Collection::new(SHOPPING_KEY);
