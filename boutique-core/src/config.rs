//! Storefront configuration
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://food-boutique.b.goit.study/api";
pub const DEFAULT_PAGE_LIMIT: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the catalog API, without trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Catalog page size.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

const fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            page_limit: default_page_limit(),
        }
    }
}

impl StorefrontConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        if !base.is_empty() {
            self.api_base = base.to_string();
        }
        self
    }

    #[must_use]
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit.max(1);
        self
    }
}
