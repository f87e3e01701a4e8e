use boutique_core::{CartClick, FixtureCatalog, ListId, MemoryStore, Storefront, StorefrontConfig};
use boutique_web::app::handlers::{build_add_to_cart, build_remove_from_cart};
use futures::executor::block_on;
use std::rc::Rc;
use yew::LocalServerRenderer;
use yew::prelude::*;

type FixtureStorefront = Storefront<FixtureCatalog, MemoryStore>;

const MANGO: &str = "640c2dd963a319ea671e383b";

#[derive(Properties)]
struct HarnessProps {
    storefront: Rc<FixtureStorefront>,
    clicks: Vec<CartClick>,
    #[prop_or_default]
    remove: Option<String>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storefront, &other.storefront)
            && self.clicks == other.clicks
            && self.remove == other.remove
    }
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let snapshot = use_state(|| props.storefront.snapshot());
    let notice = use_state(|| None::<AttrValue>);
    let fired = use_mut_ref(|| false);
    let on_add = build_add_to_cart(props.storefront.clone(), snapshot.clone(), notice.clone());
    let on_remove =
        build_remove_from_cart(props.storefront.clone(), snapshot.clone(), notice.clone());
    if !*fired.borrow() {
        *fired.borrow_mut() = true;
        for click in &props.clicks {
            on_add.emit(click.clone());
        }
        if let Some(id) = props.remove.clone() {
            on_remove.emit(id);
        }
    }
    Html::default()
}

fn loaded_storefront() -> Rc<FixtureStorefront> {
    let shop = Storefront::new(
        FixtureCatalog::sample(),
        MemoryStore::new(),
        StorefrontConfig::default(),
    );
    let filter = shop.init_filter().expect("filter");
    block_on(shop.init_load(&filter));
    Rc::new(shop)
}

fn run(storefront: &Rc<FixtureStorefront>, clicks: Vec<CartClick>, remove: Option<String>) {
    let props = HarnessProps {
        storefront: storefront.clone(),
        clicks,
        remove,
    };
    let _ = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
}

#[test]
fn add_handler_syncs_every_list() {
    let storefront = loaded_storefront();
    run(
        &storefront,
        vec![
            CartClick::new(ListId::Discount, MANGO),
            CartClick::new(ListId::Popular, MANGO),
        ],
        None,
    );
    assert_eq!(storefront.cart_count(), 1);
    let board = storefront.board();
    assert!(board.is_added(ListId::Popular, MANGO));
    assert!(board.is_added(ListId::Discount, MANGO));
}

#[test]
fn unknown_product_is_reported_not_added() {
    let storefront = loaded_storefront();
    run(
        &storefront,
        vec![CartClick::new(ListId::Popular, "missing")],
        None,
    );
    assert_eq!(storefront.cart_count(), 0);
}

#[test]
fn remove_handler_clears_buttons() {
    let storefront = loaded_storefront();
    run(
        &storefront,
        vec![CartClick::new(ListId::Popular, MANGO)],
        Some(MANGO.to_string()),
    );
    assert_eq!(storefront.cart_count(), 0);
    assert!(!storefront.board().is_added(ListId::Discount, MANGO));
}
