//! Persistent key/value storage and the typed slots kept in it
use crate::product::Product;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;
use thiserror::Error;

pub const FILTER_STORAGE: &str = "filter-storage";
pub const CATEGORY_STORAGE: &str = "category-storage";
pub const PRODUCT_STORAGE: &str = "product-storage";
pub const POPULARITY_STORAGE: &str = "popularity-storage";
pub const DISCOUNT_STORAGE: &str = "discount-storage";
pub const SHOP_STORAGE: &str = "shop-storage";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key/value backend, e.g. browser `localStorage`.
pub trait KeyValueStore: Clone {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// A JSON value of type `T` kept under a single key.
#[derive(Debug, Clone)]
pub struct Slot<T, S> {
    key: &'static str,
    store: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, S> Slot<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub const fn new(key: &'static str, store: S) -> Self {
        Self {
            key,
            store,
            _value: PhantomData,
        }
    }

    /// Stored value, or `None` when absent or unreadable.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        let raw = match self.store.get_item(self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("reading {}: {err}", self.key);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding corrupt value in {}: {err}", self.key);
                None
            }
        }
    }

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or written.
    pub fn set(&self, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_item(self.key, &raw)
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(self.key)
    }
}

/// The persisted cart: products the visitor added, without duplicate ids.
#[derive(Debug, Clone)]
pub struct ShopStorage<S> {
    slot: Slot<Vec<Product>, S>,
}

impl<S: KeyValueStore> ShopStorage<S> {
    pub const fn new(store: S) -> Self {
        Self {
            slot: Slot::new(SHOP_STORAGE, store),
        }
    }

    #[must_use]
    pub fn all_products(&self) -> Vec<Product> {
        self.slot.get().unwrap_or_default()
    }

    #[must_use]
    pub fn product_ids(&self) -> Vec<String> {
        crate::product::product_ids(&self.all_products())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.all_products().iter().any(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all_products().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a product. Returns `false` when its id is already in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    pub fn set_product(&self, product: Product) -> Result<bool, StorageError> {
        let mut products = self.all_products();
        if products.iter().any(|stored| stored.id == product.id) {
            return Ok(false);
        }
        products.push(product);
        self.slot.set(&products)?;
        Ok(true)
    }

    /// Remove a product by id. Returns `false` when it was not in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written back.
    pub fn remove_product(&self, id: &str) -> Result<bool, StorageError> {
        let mut products = self.all_products();
        let before = products.len();
        products.retain(|product| product.id != id);
        if products.len() == before {
            return Ok(false);
        }
        self.slot.set(&products)?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.slot.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterParams;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            img: String::new(),
            category: "Dairy".to_string(),
            price: 2.5,
            size: "1 l".to_string(),
            is_10_percent_off: false,
            popularity: 0,
        }
    }

    #[test]
    fn slot_roundtrips_through_shared_store() {
        let store = MemoryStore::new();
        let writer = Slot::<FilterParams, _>::new(FILTER_STORAGE, store.clone());
        let reader = Slot::<FilterParams, _>::new(FILTER_STORAGE, store.clone());
        assert!(reader.get().is_none());

        writer.set(&FilterParams::initial(6)).unwrap();
        assert_eq!(reader.get(), Some(FilterParams::initial(6)));

        reader.clear().unwrap();
        assert!(writer.get().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_slot_reads_as_missing() {
        let store = MemoryStore::new();
        store.set_item(FILTER_STORAGE, "{not json").unwrap();
        let slot = Slot::<FilterParams, _>::new(FILTER_STORAGE, store);
        assert!(slot.get().is_none());
    }

    #[test]
    fn shop_storage_rejects_duplicate_ids() {
        let shop = ShopStorage::new(MemoryStore::new());
        assert!(shop.is_empty());
        assert!(shop.set_product(product("a")).unwrap());
        assert!(shop.set_product(product("b")).unwrap());
        assert!(!shop.set_product(product("a")).unwrap());
        assert_eq!(shop.product_ids(), vec!["a".to_string(), "b".to_string()]);
        assert!(shop.contains("b"));
    }

    #[test]
    fn shop_storage_removes_products() {
        let shop = ShopStorage::new(MemoryStore::new());
        shop.set_product(product("a")).unwrap();
        shop.set_product(product("b")).unwrap();

        assert!(shop.remove_product("a").unwrap());
        assert!(!shop.remove_product("a").unwrap());
        assert_eq!(shop.len(), 1);

        shop.clear().unwrap();
        assert!(shop.all_products().is_empty());
    }
}
