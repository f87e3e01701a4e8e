//! Catalog filter parameters persisted between visits
use serde::{Deserialize, Serialize};

/// Keyword, category, sort and paging for the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "byABC", default = "default_by_abc")]
    pub by_abc: bool,
    #[serde(default = "default_page")]
    pub page: u32,
    pub limit: u32,
}

const fn default_by_abc() -> bool {
    true
}

const fn default_page() -> u32 {
    1
}

impl FilterParams {
    /// Parameters used on a first visit: no keyword, no category, A-Z, page 1.
    #[must_use]
    pub const fn initial(limit: u32) -> Self {
        Self {
            keyword: None,
            category: None,
            by_abc: true,
            page: 1,
            limit,
        }
    }

    /// Same filter with a new page size. Paging restarts from the first page.
    #[must_use]
    pub fn with_page_limit(&self, limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_keyword(&self, keyword: Option<String>) -> Self {
        Self {
            keyword,
            page: 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_category(&self, category: Option<String>) -> Self {
        Self {
            category,
            page: 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Query pairs in the order the products endpoint expects them.
    /// Blank keyword and category are left out.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(keyword) = non_blank(self.keyword.as_deref()) {
            pairs.push(("keyword", keyword.to_string()));
        }
        if let Some(category) = non_blank(self.category.as_deref()) {
            pairs.push(("category", category.to_string()));
        }
        pairs.push(("byABC", self.by_abc.to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
