//! Persisted Slices
//!
//! Session and cart survive reloads through `localStorage`. The storage
//! backend is a trait so the serialization rules can be tested natively.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const AUTH_KEY: &str = "auth-storage";
pub const CART_KEY: &str = "cart-storage";

pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`; silently inert when storage is unavailable.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValue for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("[STORAGE] could not write `{key}`");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValue for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Reads a slice, dropping entries that no longer decode.
pub fn load<T: DeserializeOwned>(storage: &impl KeyValue, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORAGE] discarding unreadable `{key}`: {e}");
            storage.remove(key);
            None
        }
    }
}

pub fn save<T: Serialize>(storage: &impl KeyValue, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set(key, &raw),
        Err(e) => log::warn!("[STORAGE] could not serialize `{key}`: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    #[test]
    fn test_round_trip_through_storage() {
        let storage = MemoryStorage::default();
        let cart = Cart::default();
        save(&storage, CART_KEY, &cart);
        assert_eq!(load::<Cart>(&storage, CART_KEY), Some(cart));
    }

    #[test]
    fn test_corrupt_entry_is_discarded() {
        let storage = MemoryStorage::default();
        storage.set(CART_KEY, "{not json");
        assert_eq!(load::<Cart>(&storage, CART_KEY), None);
        assert_eq!(storage.get(CART_KEY), None);
    }
}
