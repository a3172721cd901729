use std::{fmt::Display, marker::PhantomData, str::FromStr};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, Store};

/// An ordered array of records persisted as one JSON value under `key`.
pub struct Collection<T> {
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Collection<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    /// Absent key reads as empty; anything that is not an array of `T`
    /// is reported as [`Error::Corrupted`].
    pub async fn load<S: Store + ?Sized>(&self, store: &S) -> Result<Vec<T>> {
        let Some(raw) = store.get(self.key).await? else {
            return Ok(vec![]);
        };

        serde_json::from_str::<Option<Vec<T>>>(&raw)
            .map(Option::unwrap_or_default)
            .map_err(|source| Error::Corrupted {
                key: self.key.to_owned(),
                source,
            })
    }

    /// Same as [`Collection::load`] but a corrupted value degrades to empty.
    pub async fn load_or_default<S: Store + ?Sized>(&self, store: &S) -> Result<Vec<T>> {
        match self.load(store).await {
            Err(Error::Corrupted { key, source }) => {
                tracing::warn!(key = %key, err = %source, "corrupted collection, reading as empty");

                Ok(vec![])
            }
            other => other,
        }
    }

    pub async fn save<S: Store + ?Sized>(&self, store: &S, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        store.set(self.key, &raw).await
    }
}

/// A single JSON object persisted under `key`, defaulted when absent.
pub struct Document<T> {
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Document<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: Serialize + DeserializeOwned + Default> Document<T> {
    pub async fn load<S: Store + ?Sized>(&self, store: &S) -> Result<T> {
        let Some(raw) = store.get(self.key).await? else {
            return Ok(T::default());
        };

        serde_json::from_str::<Option<T>>(&raw)
            .map(Option::unwrap_or_default)
            .map_err(|source| Error::Corrupted {
                key: self.key.to_owned(),
                source,
            })
    }

    pub async fn load_or_default<S: Store + ?Sized>(&self, store: &S) -> Result<T> {
        match self.load(store).await {
            Err(Error::Corrupted { key, source }) => {
                tracing::warn!(key = %key, err = %source, "corrupted document, reading defaults");

                Ok(T::default())
            }
            other => other,
        }
    }

    pub async fn save<S: Store + ?Sized>(&self, store: &S, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        store.set(self.key, &raw).await
    }
}

/// A scalar choice stored as its plain string form.
pub struct Preference<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> Preference<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }
}

impl<T: FromStr + Display + Default> Preference<T> {
    /// Unknown stored values read as the default.
    pub async fn load<S: Store + ?Sized>(&self, store: &S) -> Result<T> {
        let Some(raw) = store.get(self.key).await? else {
            return Ok(T::default());
        };

        Ok(raw.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(key = self.key, value = %raw, "unknown preference value, using default");
            T::default()
        }))
    }

    pub async fn save<S: Store + ?Sized>(&self, store: &S, value: &T) -> Result<()> {
        store.set(self.key, &value.to_string()).await
    }
}
