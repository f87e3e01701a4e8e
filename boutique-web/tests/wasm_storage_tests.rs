#![cfg(target_arch = "wasm32")]

use boutique_core::storage::SHOP_STORAGE;
use boutique_core::{CartClick, FixtureCatalog, KeyValueStore, ListId, Storefront, StorefrontConfig};
use boutique_web::storage::LocalStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const MANGO: &str = "640c2dd963a319ea671e383b";

fn clear_storage() {
    let storage = boutique_web::dom::local_storage().expect("localStorage");
    storage.clear().expect("clear localStorage");
}

#[wasm_bindgen_test]
fn local_store_reads_back_writes() {
    clear_storage();
    let store = LocalStore;
    assert_eq!(store.get_item("filter-storage").unwrap(), None);
    store.set_item("filter-storage", "{\"limit\":6}").unwrap();
    assert_eq!(
        store.get_item("filter-storage").unwrap().as_deref(),
        Some("{\"limit\":6}")
    );
    store.remove_item("filter-storage").unwrap();
    assert_eq!(store.get_item("filter-storage").unwrap(), None);
}

#[wasm_bindgen_test]
async fn cart_survives_a_new_storefront() {
    clear_storage();
    let first = Storefront::new(FixtureCatalog::sample(), LocalStore, StorefrontConfig::default());
    let filter = first.init_filter().unwrap();
    first.init_load(&filter).await;
    first
        .add_to_cart(&CartClick::new(ListId::Popular, MANGO))
        .unwrap();
    assert!(LocalStore.get_item(SHOP_STORAGE).unwrap().is_some());

    let second = Storefront::new(FixtureCatalog::sample(), LocalStore, StorefrontConfig::default());
    let filter = second.init_filter().unwrap();
    second.init_load(&filter).await;
    assert!(second.board().is_added(ListId::Discount, MANGO));
}
