mod allergy;
mod update;

pub use update::UpdateInput;

use fridgekit_shared::{State, Store};
use std::ops::Deref;

use crate::{SETTINGS, Settings};

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

    /// Current settings; unreadable storage reads as defaults.
    pub async fn load(&self) -> fridgekit_shared::Result<Settings> {
        crate::load(&self.store).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn reset(&self) -> fridgekit_shared::Result<Settings> {
        let settings = Settings::default();
        SETTINGS.save(&self.store, &settings).await?;

        Ok(settings)
    }
}
