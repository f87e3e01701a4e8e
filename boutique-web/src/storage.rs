//! `localStorage` backend for the storefront slots
use crate::dom;
use boutique_core::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn unavailable(err: &JsValue) -> StorageError {
    StorageError::Unavailable(dom::js_error_message(err))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        dom::local_storage()
            .and_then(|storage| storage.get_item(key))
            .map_err(|e| unavailable(&e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .and_then(|storage| storage.set_item(key, value))
            .map_err(|e| unavailable(&e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .and_then(|storage| storage.remove_item(key))
            .map_err(|e| unavailable(&e))
    }
}
