//! Catalog product models as served by the Food Boutique API
use serde::{Deserialize, Serialize};

/// A single product card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub size: String,
    #[serde(rename = "is10PercentOff", default)]
    pub is_10_percent_off: bool,
    #[serde(default)]
    pub popularity: u32,
}

/// One page of the filtered catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<Product>,
}

impl ProductPage {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            page: 1,
            per_page: 0,
            total_pages: 0,
            results: Vec::new(),
        }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Product ids in render order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        product_ids(&self.results)
    }
}

impl Default for ProductPage {
    fn default() -> Self {
        Self::empty()
    }
}

/// Category names, in the order the API returns them.
pub type Categories = Vec<String>;

/// Find a product by id.
#[must_use]
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|product| product.id == id)
}

#[must_use]
pub fn product_ids(products: &[Product]) -> Vec<String> {
    products.iter().map(|product| product.id.clone()).collect()
}
