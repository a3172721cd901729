mod builtin;
mod command;
mod query;
mod types;

pub use builtin::*;
pub use command::*;
pub use query::*;
pub use types::*;

use fridgekit_shared::Collection;

pub const USER_RECIPES_KEY: &str = "userRecipes";

pub(crate) const USER_RECIPES: Collection<Recipe> = Collection::new(USER_RECIPES_KEY);
