//! Catalog client backed by the browser `fetch` API
use crate::dom;
use async_trait::async_trait;
use boutique_core::{
    CatalogApi, CatalogError, Categories, Endpoints, FilterParams, Product, ProductPage,
    decode_categories, decode_product_page, decode_products,
};

/// Talks to the Food Boutique REST API.
#[derive(Debug, Clone)]
pub struct FetchCatalog {
    endpoints: Endpoints,
}

impl FetchCatalog {
    #[must_use]
    pub fn new(api_base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(api_base),
        }
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[allow(clippy::future_not_send)]
    async fn get(&self, url: String) -> Result<String, CatalogError> {
        let (status, body) = dom::fetch_text(&url)
            .await
            .map_err(|e| CatalogError::Network(dom::js_error_message(&e)))?;
        check_status(status, url)?;
        Ok(body)
    }
}

fn check_status(status: u16, url: String) -> Result<(), CatalogError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogError::Status { status, url })
    }
}

#[async_trait(?Send)]
impl CatalogApi for FetchCatalog {
    async fn product_categories(&self) -> Result<Categories, CatalogError> {
        let body = self.get(self.endpoints.categories()).await?;
        decode_categories(&body)
    }

    async fn products(&self, filter: &FilterParams) -> Result<ProductPage, CatalogError> {
        let body = self.get(self.endpoints.products(filter)).await?;
        decode_product_page(&body)
    }

    async fn popular_products(&self) -> Result<Vec<Product>, CatalogError> {
        let body = self.get(self.endpoints.popular()).await?;
        decode_products(&body)
    }

    async fn discounted_products(&self) -> Result<Vec<Product>, CatalogError> {
        let body = self.get(self.endpoints.discount()).await?;
        decode_products(&body)
    }
}
