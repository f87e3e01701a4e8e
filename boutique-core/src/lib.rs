//! Food Boutique storefront core
//!
//! Platform-agnostic storefront logic: catalog models and endpoints, the
//! persisted filter and cart, and the cart-button state shared by the
//! catalog, popular and discount lists. The browser app and the scenario
//! tester both drive a [`Storefront`] over their own storage and catalog.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod product;
pub mod storage;
pub mod storefront;

// Re-export commonly used types
pub use cart::{ButtonBoard, CartClick, CartState, ListId};
pub use catalog::{
    CatalogApi, CatalogError, CatalogFixture, CatalogSource, Endpoints, FixtureCatalog,
    decode_categories, decode_product_page, decode_products,
};
pub use config::StorefrontConfig;
pub use filter::FilterParams;
pub use product::{Categories, Product, ProductPage, find_product};
pub use storage::{KeyValueStore, MemoryStore, ShopStorage, Slot, StorageError};
pub use storefront::{
    CartOutcome, ListStatus, LoadReport, Snapshot, Storefront, StorefrontError,
};
