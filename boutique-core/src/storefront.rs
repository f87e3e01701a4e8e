//! Storefront session: loads the catalog lists, persists them and keeps
//! every cart button in line with the persisted cart.
use crate::cart::{ButtonBoard, CartClick, CartState, ListId};
use crate::catalog::{CatalogApi, CatalogError, CatalogSource};
use crate::config::StorefrontConfig;
use crate::filter::FilterParams;
use crate::product::{Categories, Product, ProductPage, find_product, product_ids};
use crate::storage::{
    CATEGORY_STORAGE, DISCOUNT_STORAGE, FILTER_STORAGE, KeyValueStore, POPULARITY_STORAGE,
    PRODUCT_STORAGE, ShopStorage, Slot, StorageError,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Product {id} is not in the {} list", .list.ls_name())]
    UnknownProduct { list: ListId, id: String },
}

/// Load state of one catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl ListStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    fn from_result<T, E: std::fmt::Display>(source: CatalogSource, result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Ready,
            Err(err) => {
                log::warn!("loading {source} failed: {err}");
                Self::Failed(err.to_string())
            }
        }
    }
}

/// Outcome of the initial load, one status per source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadReport {
    pub categories: ListStatus,
    pub products: ListStatus,
    pub popular: ListStatus,
    pub discount: ListStatus,
}

impl LoadReport {
    #[must_use]
    pub const fn status(&self, source: CatalogSource) -> &ListStatus {
        match source {
            CatalogSource::Categories => &self.categories,
            CatalogSource::Products => &self.products,
            CatalogSource::Popular => &self.popular,
            CatalogSource::Discount => &self.discount,
        }
    }

    #[must_use]
    pub fn all_ready(&self) -> bool {
        CatalogSource::ALL
            .into_iter()
            .all(|source| self.status(source).is_ready())
    }

    #[must_use]
    pub fn failures(&self) -> Vec<CatalogSource> {
        CatalogSource::ALL
            .into_iter()
            .filter(|source| matches!(self.status(*source), ListStatus::Failed(_)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The button was already added, or the cart already held the product.
    Ignored,
    Added { count: usize },
}

/// Everything a view needs to draw the storefront.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub filter: Option<FilterParams>,
    pub categories: Categories,
    pub products: ProductPage,
    pub popular: Vec<Product>,
    pub discount: Vec<Product>,
    pub cart: Vec<Product>,
    pub board: ButtonBoard,
}

impl Snapshot {
    #[must_use]
    pub fn list(&self, list: ListId) -> &[Product] {
        match list {
            ListId::Product => &self.products.results,
            ListId::Popular => &self.popular,
            ListId::Discount => &self.discount,
        }
    }

    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }
}

/// Lists as last rendered. A source that failed to load keeps its previous
/// contents, which is nothing on a fresh visit.
#[derive(Debug, Clone, Default)]
struct Shown {
    products: ProductPage,
    popular: Vec<Product>,
    discount: Vec<Product>,
}

/// Catalog lists, filter and cart for one visitor.
pub struct Storefront<A, S> {
    api: A,
    config: StorefrontConfig,
    filter: Slot<FilterParams, S>,
    categories: Slot<Categories, S>,
    products: Slot<ProductPage, S>,
    popular: Slot<Vec<Product>, S>,
    discount: Slot<Vec<Product>, S>,
    shop: ShopStorage<S>,
    shown: RefCell<Shown>,
    board: RefCell<ButtonBoard>,
}

impl<A, S> Storefront<A, S>
where
    A: CatalogApi,
    S: KeyValueStore,
{
    pub fn new(api: A, store: S, config: StorefrontConfig) -> Self {
        Self {
            api,
            config,
            filter: Slot::new(FILTER_STORAGE, store.clone()),
            categories: Slot::new(CATEGORY_STORAGE, store.clone()),
            products: Slot::new(PRODUCT_STORAGE, store.clone()),
            popular: Slot::new(POPULARITY_STORAGE, store.clone()),
            discount: Slot::new(DISCOUNT_STORAGE, store.clone()),
            shop: ShopStorage::new(store),
            shown: RefCell::new(Shown::default()),
            board: RefCell::new(ButtonBoard::new()),
        }
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Store the initial filter on a first visit, or restart paging when the
    /// stored page size no longer matches the configured one.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter cannot be written.
    pub fn init_filter(&self) -> Result<FilterParams, StorefrontError> {
        let limit = self.config.page_limit;
        let params = match self.filter.get() {
            None => FilterParams::initial(limit),
            Some(stored) if stored.limit != limit => stored.with_page_limit(limit),
            Some(stored) => return Ok(stored),
        };
        self.filter.set(&params)?;
        Ok(params)
    }

    /// Fetch categories, catalog page, popular and discounted products
    /// concurrently. A failing source never blocks the others. Once all have
    /// settled the cart state is applied to every rendered list.
    pub async fn init_load(&self, filter: &FilterParams) -> LoadReport {
        let (categories, products, popular, discount) = futures::join!(
            self.api.product_categories(),
            self.api.products(filter),
            self.api.popular_products(),
            self.api.discounted_products(),
        );

        let categories = categories
            .map_err(StorefrontError::from)
            .and_then(|c| self.categories.set(&c).map_err(StorefrontError::from));
        let products = products
            .map_err(StorefrontError::from)
            .and_then(|page| self.store_products(&page));
        let popular = popular
            .map_err(StorefrontError::from)
            .and_then(|list| self.store_popular(list));
        let discount = discount
            .map_err(StorefrontError::from)
            .and_then(|list| self.store_discount(list));

        let report = LoadReport {
            categories: ListStatus::from_result(CatalogSource::Categories, &categories),
            products: ListStatus::from_result(CatalogSource::Products, &products),
            popular: ListStatus::from_result(CatalogSource::Popular, &popular),
            discount: ListStatus::from_result(CatalogSource::Discount, &discount),
        };
        self.set_cart_state_for_all_products();
        report
    }

    /// Fetch the catalog page for `filter` and redraw the catalog list.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the page cannot be stored.
    pub async fn refresh_products(&self, filter: &FilterParams) -> Result<(), StorefrontError> {
        let page = self.api.products(filter).await?;
        self.store_products(&page)?;
        self.set_cart_state_for_all_products();
        Ok(())
    }

    /// Persist new filter params and reload the catalog with them.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter cannot be stored or the reload fails.
    pub async fn apply_filter(&self, filter: &FilterParams) -> Result<(), StorefrontError> {
        self.filter.set(filter)?;
        self.refresh_products(filter).await
    }

    /// Switch page size. Returns `false` when the stored size already matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter cannot be stored or the reload fails.
    pub async fn set_page_limit(&self, limit: u32) -> Result<bool, StorefrontError> {
        let next = match self.filter.get() {
            Some(current) if current.limit == limit => return Ok(false),
            Some(current) => current.with_page_limit(limit),
            None => FilterParams::initial(limit),
        };
        self.apply_filter(&next).await?;
        Ok(true)
    }

    /// Mark every product in the persisted cart as added, in every list.
    pub fn set_cart_state_for_all_products(&self) {
        let ids = self.shop.product_ids();
        if ids.is_empty() {
            return;
        }
        self.board.borrow_mut().set_cart_state_for_all_products(&ids);
    }

    /// Set the button state of one product in every list that renders it.
    pub fn set_cart_state_for_one_product(&self, id: &str, state: CartState) -> usize {
        self.board
            .borrow_mut()
            .set_cart_state_for_one_product(id, state)
    }

    /// Handle a click on an "add to cart" button.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownProduct`] when the clicked id is not
    /// in the list it was rendered from, or a storage error if the cart cannot
    /// be written.
    pub fn add_to_cart(&self, click: &CartClick) -> Result<CartOutcome, StorefrontError> {
        if !self.board.borrow().accepts_click(click) {
            return Ok(CartOutcome::Ignored);
        }
        let product = self
            .source_product(click.list, &click.product_id)
            .ok_or_else(|| StorefrontError::UnknownProduct {
                list: click.list,
                id: click.product_id.clone(),
            })?;

        self.set_cart_state_for_one_product(&click.product_id, CartState::InCart);
        match self.shop.set_product(product) {
            Ok(true) => {}
            // Stored by another session sharing the backend; buttons now match it.
            Ok(false) => return Ok(CartOutcome::Ignored),
            Err(err) => {
                self.set_cart_state_for_one_product(&click.product_id, CartState::NotInCart);
                return Err(err.into());
            }
        }
        let count = self.cart_count();
        log::debug!(
            "added {} from {} list, cart holds {count}",
            click.product_id,
            click.list.ls_name()
        );
        Ok(CartOutcome::Added { count })
    }

    /// Drop a product from the cart and release its buttons.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written.
    pub fn remove_from_cart(&self, id: &str) -> Result<usize, StorefrontError> {
        if self.shop.remove_product(id)? {
            self.set_cart_state_for_one_product(id, CartState::NotInCart);
        }
        Ok(self.cart_count())
    }

    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.shop.len()
    }

    #[must_use]
    pub fn cart(&self) -> Vec<Product> {
        self.shop.all_products()
    }

    #[must_use]
    pub fn filter(&self) -> Option<FilterParams> {
        self.filter.get()
    }

    #[must_use]
    pub fn categories(&self) -> Categories {
        self.categories.get().unwrap_or_default()
    }

    /// Catalog page currently rendered.
    #[must_use]
    pub fn products(&self) -> ProductPage {
        self.shown.borrow().products.clone()
    }

    #[must_use]
    pub fn popular(&self) -> Vec<Product> {
        self.shown.borrow().popular.clone()
    }

    #[must_use]
    pub fn discounted(&self) -> Vec<Product> {
        self.shown.borrow().discount.clone()
    }

    #[must_use]
    pub fn board(&self) -> ButtonBoard {
        self.board.borrow().clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            filter: self.filter(),
            categories: self.categories(),
            products: self.products(),
            popular: self.popular(),
            discount: self.discounted(),
            cart: self.cart(),
            board: self.board(),
        }
    }

    fn store_products(&self, page: &ProductPage) -> Result<(), StorefrontError> {
        self.products.set(page)?;
        self.shown.borrow_mut().products = page.clone();
        self.board
            .borrow_mut()
            .render_list(ListId::Product, page.ids());
        Ok(())
    }

    fn store_popular(&self, products: Vec<Product>) -> Result<(), StorefrontError> {
        self.popular.set(&products)?;
        self.board
            .borrow_mut()
            .render_list(ListId::Popular, product_ids(&products));
        self.shown.borrow_mut().popular = products;
        Ok(())
    }

    fn store_discount(&self, products: Vec<Product>) -> Result<(), StorefrontError> {
        self.discount.set(&products)?;
        self.board
            .borrow_mut()
            .render_list(ListId::Discount, product_ids(&products));
        self.shown.borrow_mut().discount = products;
        Ok(())
    }

    fn source_product(&self, list: ListId, id: &str) -> Option<Product> {
        let products = match list {
            ListId::Product => self.products.get().map(|page| page.results),
            ListId::Popular => self.popular.get(),
            ListId::Discount => self.discount.get(),
        }?;
        find_product(&products, id).cloned()
    }
}
