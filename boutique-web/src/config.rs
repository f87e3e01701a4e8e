//! Build-time configuration for the storefront.
//!
//! `BOUTIQUE_API_BASE` overrides the catalog API at compile time, and
//! `PUBLIC_URL` (e.g., `/shop` for GitHub Pages) prefixes generated links and
//! the router base. Local builds fall back to the public API and root paths.
use boutique_core::StorefrontConfig;

#[must_use]
pub fn storefront_config() -> StorefrontConfig {
    StorefrontConfig::default().with_api_base(option_env!("BOUTIQUE_API_BASE").unwrap_or(""))
}

/// Link to a page of the app that respects the deployment base path.
#[must_use]
pub fn page_href(relative: &str) -> String {
    page_href_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/shop` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn page_href_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
