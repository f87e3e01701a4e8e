use anyhow::{Result, anyhow};
use boutique_core::{
    CatalogFixture, FixtureCatalog, ListId, LoadReport, MemoryStore, Storefront, StorefrontConfig,
};

pub mod cart;
pub mod catalog;

pub type FixtureStorefront = Storefront<FixtureCatalog, MemoryStore>;

/// Shared inputs for every scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub fixture: CatalogFixture,
    pub config: StorefrontConfig,
}

impl ScenarioCtx {
    pub fn new(fixture: CatalogFixture) -> Self {
        Self {
            fixture,
            config: StorefrontConfig::default(),
        }
    }

    /// A storefront over `store` backed by a fresh fixture catalog.
    pub fn storefront(&self, store: MemoryStore) -> FixtureStorefront {
        self.storefront_with(FixtureCatalog::new(self.fixture.clone()), store, self.config.clone())
    }

    pub fn storefront_with(
        &self,
        catalog: FixtureCatalog,
        store: MemoryStore,
        config: StorefrontConfig,
    ) -> FixtureStorefront {
        Storefront::new(catalog, store, config)
    }
}

/// Run the first-visit flow: restore or create the filter, then load.
pub async fn visit(storefront: &FixtureStorefront) -> Result<LoadReport> {
    let filter = storefront.init_filter()?;
    Ok(storefront.init_load(&filter).await)
}

/// Id of a product rendered in more than one list.
pub fn shared_product(storefront: &FixtureStorefront) -> Result<String> {
    let board = storefront.board();
    ListId::ALL
        .iter()
        .flat_map(|list| board.rendered_ids(*list))
        .find(|id| rendering_lists(storefront, id).len() > 1)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("fixture has no product shared between lists"))
}

/// Lists that currently render `id`.
pub fn rendering_lists(storefront: &FixtureStorefront, id: &str) -> Vec<ListId> {
    let board = storefront.board();
    ListId::ALL
        .into_iter()
        .filter(|list| board.state(*list, id).is_some())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Smoke,
    CrossListSync,
    DuplicateClickIgnored,
    PersistedCartRestored,
    PartialFetchFailure,
    PageLimitReset,
    RemoveFromCart,
    FilterPaging,
}

impl ScenarioKind {
    pub const ALL: [Self; 8] = [
        Self::Smoke,
        Self::CrossListSync,
        Self::DuplicateClickIgnored,
        Self::PersistedCartRestored,
        Self::PartialFetchFailure,
        Self::PageLimitReset,
        Self::RemoveFromCart,
        Self::FilterPaging,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::CrossListSync => "cross-list-sync",
            Self::DuplicateClickIgnored => "duplicate-click-ignored",
            Self::PersistedCartRestored => "persisted-cart-restored",
            Self::PartialFetchFailure => "partial-fetch-failure",
            Self::PageLimitReset => "page-limit-reset",
            Self::RemoveFromCart => "remove-from-cart",
            Self::FilterPaging => "filter-paging",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Smoke => "First visit loads every list and stores the filter",
            Self::CrossListSync => "Adding from one list marks the product in every list",
            Self::DuplicateClickIgnored => "Clicks on added buttons leave the cart unchanged",
            Self::PersistedCartRestored => "A returning visit shows cart products as added",
            Self::PartialFetchFailure => "One failing source leaves the other lists intact",
            Self::PageLimitReset => "Changing page size restarts paging from page one",
            Self::RemoveFromCart => "Removing a product releases its buttons everywhere",
            Self::FilterPaging => "Catalog paging keeps cart buttons in sync",
        }
    }

    pub async fn run(self, ctx: &ScenarioCtx) -> Result<()> {
        match self {
            Self::Smoke => catalog::smoke(ctx).await,
            Self::CrossListSync => cart::cross_list_sync(ctx).await,
            Self::DuplicateClickIgnored => cart::duplicate_click_ignored(ctx).await,
            Self::PersistedCartRestored => cart::persisted_cart_restored(ctx).await,
            Self::PartialFetchFailure => catalog::partial_fetch_failure(ctx).await,
            Self::PageLimitReset => catalog::page_limit_reset(ctx).await,
            Self::RemoveFromCart => cart::remove_from_cart(ctx).await,
            Self::FilterPaging => catalog::filter_paging(ctx).await,
        }
    }
}

pub fn get_scenario(name: &str) -> Option<ScenarioKind> {
    ScenarioKind::ALL.into_iter().find(|kind| kind.key() == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    ScenarioKind::ALL
        .into_iter()
        .map(|kind| (kind.key(), kind.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_resolve_back_to_scenarios() {
        for kind in ScenarioKind::ALL {
            assert_eq!(get_scenario(kind.key()), Some(kind));
        }
        assert_eq!(get_scenario("checkout"), None);
        assert_eq!(list_scenarios().len(), ScenarioKind::ALL.len());
    }

    #[tokio::test]
    async fn every_scenario_passes_on_sample_catalog() {
        let ctx = ScenarioCtx::new(CatalogFixture::sample());
        for kind in ScenarioKind::ALL {
            if let Err(err) = kind.run(&ctx).await {
                panic!("{} failed: {err:#}", kind.key());
            }
        }
    }
}
