#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
use boutique_core::{CatalogApi, FilterParams, KeyValueStore, LoadReport, Snapshot, Storefront};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Settle the stored filter, then load all catalog lists and apply the cart.
#[allow(clippy::future_not_send)]
pub async fn bootstrap_load<A, S>(storefront: &Storefront<A, S>) -> (LoadReport, Snapshot)
where
    A: CatalogApi,
    S: KeyValueStore,
{
    let filter = storefront.init_filter().unwrap_or_else(|err| {
        log::error!("Failed to store filter params: {err}");
        FilterParams::initial(storefront.config().page_limit)
    });
    let report = storefront.init_load(&filter).await;
    (report, storefront.snapshot())
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let storefront = app_state.storefront.clone();
    let snapshot = app_state.snapshot.clone();
    let report = app_state.report.clone();

    use_effect_with((), move |()| {
        // Cart counter comes from storage before any fetch completes.
        snapshot.set(storefront.snapshot());
        wasm_bindgen_futures::spawn_local(async move {
            let (loaded, view) = bootstrap_load(&storefront).await;
            for source in loaded.failures() {
                crate::dom::console_error(&format!("Failed to load {source} products"));
            }
            report.set(loaded);
            snapshot.set(view);
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_core::{
        CartClick, CatalogSource, FixtureCatalog, ListId, MemoryStore, StorefrontConfig,
    };
    use futures::executor::block_on;

    #[test]
    fn bootstrap_restores_cart_across_visits() {
        let store = MemoryStore::new();
        let first = Storefront::new(
            FixtureCatalog::sample(),
            store.clone(),
            StorefrontConfig::default(),
        );
        let (report, _) = block_on(bootstrap_load(&first));
        assert!(report.all_ready());
        first
            .add_to_cart(&CartClick::new(ListId::Product, "640c2dd963a319ea671e3765"))
            .unwrap();

        let second = Storefront::new(
            FixtureCatalog::sample().failing(CatalogSource::Discount),
            store,
            StorefrontConfig::default(),
        );
        let (report, snapshot) = block_on(bootstrap_load(&second));
        assert_eq!(report.failures(), vec![CatalogSource::Discount]);
        assert_eq!(snapshot.cart_count(), 1);
        assert!(snapshot.board.is_added(ListId::Product, "640c2dd963a319ea671e3765"));
        assert!(snapshot.board.is_added(ListId::Popular, "640c2dd963a319ea671e3765"));
    }
}
