mod clock;
mod collection;
mod command;
mod level;
mod store;

pub use clock::*;
pub use collection::*;
pub use command::*;
pub use level::*;
pub use store::*;

use std::sync::Arc;

/// Opaque record identity.
pub fn new_id() -> String {
    ulid::Ulid::new().to_string()
}

#[derive(Clone)]
pub struct State<S: Store> {
    pub store: S,
    pub clock: Arc<dyn Clock>,
}

impl<S: Store> State<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}
