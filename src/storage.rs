//! Browser Storage
//!
//! Whole-document JSON persistence over `window.localStorage`. Each logical
//! record lives under its own versioned key and is re-serialized in full on
//! every mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

pub const LISTINGS_KEY: &str = "reloop_items_v1";
pub const BOOKMARKS_KEY: &str = "reloop_bookmarks_v1";
pub const STATS_KEY: &str = "reloop_stats_v1";

#[derive(Debug)]
pub enum StorageError {
    /// localStorage is missing or disabled in this context
    Unavailable,
    /// A payload exists under the key but does not decode as the expected shape
    Corrupt(serde_json::Error),
    /// The value being saved failed to serialize
    Encode(serde_json::Error),
    /// The browser rejected the write (quota, private browsing)
    Denied,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage is not available"),
            StorageError::Corrupt(err) => write!(f, "stored payload is corrupt: {err}"),
            StorageError::Encode(err) => write!(f, "value failed to serialize: {err}"),
            StorageError::Denied => write!(f, "browser rejected the write"),
        }
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Corrupt)
}

/// Load the record stored under `key`; `Ok(None)` when nothing was stored
pub fn load<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    let storage = local_storage()?;
    match storage.get_item(key).map_err(|_| StorageError::Unavailable)? {
        Some(raw) => decode(&raw).map(Some),
        None => Ok(None),
    }
}

/// Load with a fallback: absent or unreadable data yields `fallback`
pub fn load_or<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    match load(key) {
        Ok(Some(value)) => value,
        Ok(None) => fallback,
        Err(err) => {
            web_sys::console::warn_1(&format!("[storage] {key}: {err}, using fallback").into());
            fallback
        }
    }
}

/// Serialize `value` and overwrite whatever was stored under `key`
pub fn save<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let storage = local_storage()?;
    let raw = serde_json::to_string(value).map_err(StorageError::Encode)?;
    storage
        .set_item(key, &raw)
        .map_err(|_| StorageError::Denied)
}

/// Save, reporting failures to the console instead of the caller
pub fn persist<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = save(key, value) {
        web_sys::console::error_1(&format!("[storage] {key}: {err}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stats;

    #[test]
    fn test_decode_well_formed_payload() {
        let stats: Stats = decode(r#"{"items":5,"people":5,"co2":36}"#).unwrap();
        assert_eq!(stats, Stats { items: 5, people: 5, co2: 36 });
    }

    #[test]
    fn test_decode_rejects_corrupt_payload() {
        let result = decode::<Stats>("{not json");
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let result = decode::<Stats>(r#"["items"]"#);
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }
}
