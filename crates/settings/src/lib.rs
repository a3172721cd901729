mod command;
mod types;

pub use command::*;
pub use types::*;

use fridgekit_shared::{Document, Store};

pub const SETTINGS_KEY: &str = "appSettings";

pub(crate) const SETTINGS: Document<Settings> = Document::new(SETTINGS_KEY);

/// Reads settings for other components; unreadable storage reads as defaults.
pub async fn load<S: Store + ?Sized>(store: &S) -> fridgekit_shared::Result<Settings> {
    SETTINGS.load_or_default(store).await
}
