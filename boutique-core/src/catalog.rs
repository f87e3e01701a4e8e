//! Remote catalog API: endpoints, response decoding and an in-memory fixture
use crate::filter::FilterParams;
use crate::product::{Categories, Product, ProductPage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// The four independently fetched catalog resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogSource {
    Categories,
    Products,
    Popular,
    Discount,
}

impl CatalogSource {
    pub const ALL: [Self; 4] = [
        Self::Categories,
        Self::Products,
        Self::Popular,
        Self::Discount,
    ];
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Categories => "categories",
            Self::Products => "products",
            Self::Popular => "popular",
            Self::Discount => "discount",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to the product catalog.
///
/// Futures are not required to be `Send`; browser fetches never are.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    async fn product_categories(&self) -> Result<Categories, CatalogError>;

    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    async fn products(&self, filter: &FilterParams) -> Result<ProductPage, CatalogError>;

    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    async fn popular_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    async fn discounted_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// URL builder for the catalog endpoints under one API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> String {
        format!("{}/products/categories", self.base)
    }

    #[must_use]
    pub fn products(&self, filter: &FilterParams) -> String {
        let query = filter
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/products?{query}", self.base)
    }

    #[must_use]
    pub fn popular(&self) -> String {
        format!("{}/products/popular", self.base)
    }

    #[must_use]
    pub fn discount(&self) -> String {
        format!("{}/products/discount", self.base)
    }
}

/// # Errors
///
/// Returns an error if the body is not a JSON array of strings.
pub fn decode_categories(body: &str) -> Result<Categories, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// # Errors
///
/// Returns an error if the body is not a product page.
pub fn decode_product_page(body: &str) -> Result<ProductPage, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// # Errors
///
/// Returns an error if the body is not a JSON array of products.
pub fn decode_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// Catalog contents used by [`FixtureCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub popular: Vec<Product>,
    #[serde(default)]
    pub discount: Vec<Product>,
}

impl CatalogFixture {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a fixture.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bundled sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_json(include_str!("../data/catalog_fixture.json")).unwrap_or_default()
    }
}

/// In-memory catalog that filters, sorts and pages like the remote API.
/// Individual sources can be made to fail.
#[derive(Debug, Default)]
pub struct FixtureCatalog {
    data: CatalogFixture,
    failing: RefCell<HashSet<CatalogSource>>,
    calls: RefCell<HashMap<CatalogSource, usize>>,
}

impl FixtureCatalog {
    #[must_use]
    pub fn new(data: CatalogFixture) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sample() -> Self {
        Self::new(CatalogFixture::sample())
    }

    #[must_use]
    pub fn failing(self, source: CatalogSource) -> Self {
        self.fail(source);
        self
    }

    pub fn fail(&self, source: CatalogSource) {
        self.failing.borrow_mut().insert(source);
    }

    pub fn recover(&self, source: CatalogSource) {
        self.failing.borrow_mut().remove(&source);
    }

    #[must_use]
    pub fn calls(&self, source: CatalogSource) -> usize {
        self.calls.borrow().get(&source).copied().unwrap_or(0)
    }

    fn hit(&self, source: CatalogSource) -> Result<(), CatalogError> {
        *self.calls.borrow_mut().entry(source).or_default() += 1;
        if self.failing.borrow().contains(&source) {
            return Err(CatalogError::Network(format!("{source} unavailable")));
        }
        Ok(())
    }

    fn page(&self, filter: &FilterParams) -> ProductPage {
        let keyword = filter
            .keyword
            .as_deref()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty());
        let category = filter.category.as_deref().filter(|c| !c.trim().is_empty());

        let mut matches: Vec<Product> = self
            .data
            .products
            .iter()
            .filter(|p| keyword.as_ref().is_none_or(|k| p.name.to_lowercase().contains(k)))
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        if !filter.by_abc {
            matches.reverse();
        }

        let limit = filter.limit.max(1);
        let total = u32::try_from(matches.len()).unwrap_or(u32::MAX);
        let total_pages = total.div_ceil(limit);
        let skip = usize::try_from((filter.page.max(1) - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
        let results = matches
            .into_iter()
            .skip(skip)
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();

        ProductPage {
            page: filter.page.max(1),
            per_page: limit,
            total_pages,
            results,
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for FixtureCatalog {
    async fn product_categories(&self) -> Result<Categories, CatalogError> {
        self.hit(CatalogSource::Categories)?;
        Ok(self.data.categories.clone())
    }

    async fn products(&self, filter: &FilterParams) -> Result<ProductPage, CatalogError> {
        self.hit(CatalogSource::Products)?;
        Ok(self.page(filter))
    }

    async fn popular_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.hit(CatalogSource::Popular)?;
        Ok(self.data.popular.clone())
    }

    async fn discounted_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.hit(CatalogSource::Discount)?;
        Ok(self.data.discount.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn endpoints_encode_filter_query() {
        let endpoints = Endpoints::new("https://food-boutique.b.goit.study/api/");
        let filter = FilterParams::initial(6)
            .with_keyword(Some("greek yogurt".into()))
            .with_category(Some("Breads_&_Bakery".into()));
        assert_eq!(
            endpoints.products(&filter),
            "https://food-boutique.b.goit.study/api/products?keyword=greek%20yogurt&category=Breads_%26_Bakery&byABC=true&page=1&limit=6"
        );
        assert_eq!(
            endpoints.discount(),
            "https://food-boutique.b.goit.study/api/products/discount"
        );
        assert!(endpoints.categories().ends_with("/products/categories"));
        assert!(endpoints.popular().ends_with("/products/popular"));
    }

    #[test]
    fn decoders_reject_malformed_bodies() {
        assert_eq!(decode_categories(r#"["Dairy"]"#).unwrap(), vec!["Dairy"]);
        assert!(matches!(
            decode_products("{}"),
            Err(CatalogError::Decode(_))
        ));
        assert!(decode_product_page(r#"{"page":1,"perPage":6,"totalPages":0}"#)
            .unwrap()
            .results
            .is_empty());
    }

    #[test]
    fn fixture_pages_sorted_products() {
        let catalog = FixtureCatalog::sample();
        let first = block_on(catalog.products(&FilterParams::initial(6))).unwrap();
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.results.len(), 6);
        assert_eq!(first.results[0].name, "Ackee");

        let second = block_on(catalog.products(&FilterParams::initial(6).with_page(2))).unwrap();
        assert_eq!(second.results.len(), 3);
        assert!(!second.has_next());
    }

    #[test]
    fn fixture_filters_by_keyword_and_category() {
        let catalog = FixtureCatalog::sample();
        let filter = FilterParams::initial(9).with_category(Some("Dairy".into()));
        let page = block_on(catalog.products(&filter)).unwrap();
        assert!(page.results.iter().all(|p| p.category == "Dairy"));

        let filter = FilterParams::initial(9).with_keyword(Some("BEAN".into()));
        let page = block_on(catalog.products(&filter)).unwrap();
        assert_eq!(page.results.len(), 1);

        let mut desc = FilterParams::initial(9);
        desc.by_abc = false;
        let page = block_on(catalog.products(&desc)).unwrap();
        assert_eq!(page.results[0].name, "Sourdough");
    }

    #[test]
    fn fixture_failures_are_per_source() {
        let catalog = FixtureCatalog::sample().failing(CatalogSource::Popular);
        assert!(block_on(catalog.popular_products()).is_err());
        assert!(block_on(catalog.discounted_products()).is_ok());
        catalog.recover(CatalogSource::Popular);
        assert_eq!(block_on(catalog.popular_products()).unwrap().len(), 3);
        assert_eq!(catalog.calls(CatalogSource::Popular), 2);
    }
}
