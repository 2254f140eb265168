//! Whole-object JSON blobs in `localStorage`.
//!
//! Every record stored here is read once at startup and rewritten in full on
//! each change. Reads never fall back silently: a blob that fails to parse or
//! validate comes back as an error so the caller can log it before using its
//! defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to read key {0}")]
    Read(String),
    #[error("failed to write key {0}")]
    Write(String),
    #[error("stored value is not valid JSON for this record: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("stored value failed validation: {0}")]
    Invalid(String),
}

/// A record that knows how to check itself after deserialization.
pub trait Record: Serialize + DeserializeOwned {
    const KEY: &'static str;

    fn validate(&self) -> Result<(), String>;
}

/// Parse and validate a raw blob.
pub fn decode<T: Record>(raw: &str) -> Result<T, StorageError> {
    let value: T = serde_json::from_str(raw)?;
    value.validate().map_err(StorageError::Invalid)?;
    Ok(value)
}

pub fn encode<T: Record>(value: &T) -> Result<String, StorageError> {
    Ok(serde_json::to_string(value)?)
}

fn local_storage() -> Result<Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(StorageError::Unavailable)
}

/// `Ok(None)` when nothing has been stored yet.
pub fn load<T: Record>() -> Result<Option<T>, StorageError> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(T::KEY)
        .map_err(|_| StorageError::Read(T::KEY.to_string()))?;
    match raw {
        Some(raw) => decode(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn save<T: Record>(value: &T) -> Result<(), StorageError> {
    let storage = local_storage()?;
    let raw = encode(value)?;
    storage
        .set_item(T::KEY, &raw)
        .map_err(|_| StorageError::Write(T::KEY.to_string()))
}

/// Load a record, logging and returning `None` when the blob is unusable.
pub fn load_or_warn<T: Record>() -> Option<T> {
    match load::<T>() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring stored {}: {}", T::KEY, e);
            None
        }
    }
}

/// Save a record; failures are logged and otherwise ignored.
pub fn save_or_warn<T: Record>(value: &T) {
    if let Err(e) = save(value) {
        log::warn!("Could not persist {}: {}", T::KEY, e);
    }
}
