use crate::api::FetchCatalog;
use crate::config;
use crate::storage::LocalStore;
use boutique_core::{LoadReport, Snapshot, Storefront};
use std::rc::Rc;
use yew::prelude::*;

pub type WebStorefront = Storefront<FetchCatalog, LocalStore>;

#[derive(Clone)]
pub struct AppState {
    pub storefront: Rc<WebStorefront>,
    pub snapshot: UseStateHandle<Snapshot>,
    pub report: UseStateHandle<LoadReport>,
    pub notice: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        storefront: use_memo((), |()| {
            let cfg = config::storefront_config();
            Storefront::new(FetchCatalog::new(&cfg.api_base), LocalStore, cfg)
        }),
        snapshot: use_state(Snapshot::default),
        report: use_state(LoadReport::default),
        notice: use_state(|| None::<AttrValue>),
    }
}

impl AppState {
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.snapshot.cart_count()
    }
}
