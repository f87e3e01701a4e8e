use crate::app::state::AppState;
use boutique_core::{CartClick, CartOutcome, CatalogApi, KeyValueStore, Snapshot, Storefront};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub add_to_cart: Callback<CartClick>,
    pub remove_from_cart: Callback<String>,
}

impl AppHandlers {
    pub fn new(state: &AppState) -> Self {
        Self {
            add_to_cart: build_add_to_cart(
                state.storefront.clone(),
                state.snapshot.clone(),
                state.notice.clone(),
            ),
            remove_from_cart: build_remove_from_cart(
                state.storefront.clone(),
                state.snapshot.clone(),
                state.notice.clone(),
            ),
        }
    }
}

pub fn build_add_to_cart<A, S>(
    storefront: Rc<Storefront<A, S>>,
    snapshot: UseStateHandle<Snapshot>,
    notice: UseStateHandle<Option<AttrValue>>,
) -> Callback<CartClick>
where
    A: CatalogApi + 'static,
    S: KeyValueStore + 'static,
{
    Callback::from(move |click: CartClick| match storefront.add_to_cart(&click) {
        Ok(CartOutcome::Added { .. }) => {
            notice.set(None);
            snapshot.set(storefront.snapshot());
        }
        // Buttons may have caught up with a cart written elsewhere.
        Ok(CartOutcome::Ignored) => snapshot.set(storefront.snapshot()),
        Err(err) => {
            log::error!("Failed to add to cart: {err}");
            notice.set(Some(AttrValue::from(format!("Could not add to cart: {err}"))));
        }
    })
}

pub fn build_remove_from_cart<A, S>(
    storefront: Rc<Storefront<A, S>>,
    snapshot: UseStateHandle<Snapshot>,
    notice: UseStateHandle<Option<AttrValue>>,
) -> Callback<String>
where
    A: CatalogApi + 'static,
    S: KeyValueStore + 'static,
{
    Callback::from(move |id: String| match storefront.remove_from_cart(&id) {
        Ok(_) => snapshot.set(storefront.snapshot()),
        Err(err) => {
            log::error!("Failed to remove {id} from cart: {err}");
            notice.set(Some(AttrValue::from(format!("Could not update the cart: {err}"))));
        }
    })
}
