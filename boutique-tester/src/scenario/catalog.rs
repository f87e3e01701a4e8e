use anyhow::{Result, bail, ensure};
use boutique_core::{CartClick, CatalogSource, FilterParams, FixtureCatalog, ListId, MemoryStore};

use super::{ScenarioCtx, visit};

pub async fn smoke(ctx: &ScenarioCtx) -> Result<()> {
    let storefront = ctx.storefront(MemoryStore::new());
    let report = visit(&storefront).await?;
    ensure!(
        report.all_ready(),
        "sources failed: {:?}",
        report.failures()
    );

    let limit = ctx.config.page_limit;
    ensure!(
        storefront.filter() == Some(FilterParams::initial(limit)),
        "initial filter was not stored"
    );
    let page = storefront.products();
    ensure!(
        page.results.len() <= usize::try_from(limit)?,
        "catalog page holds {} products",
        page.results.len()
    );
    ensure!(
        storefront.popular().len() == ctx.fixture.popular.len(),
        "popular list incomplete"
    );
    ensure!(
        storefront.discounted().len() == ctx.fixture.discount.len(),
        "discount list incomplete"
    );
    ensure!(storefront.cart_count() == 0, "fresh cart is not empty");
    Ok(())
}

pub async fn partial_fetch_failure(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let seeded = ctx.storefront(store.clone());
    visit(&seeded).await?;
    let Some(product) = seeded.discounted().first().cloned() else {
        bail!("fixture has no discounted products");
    };
    seeded.add_to_cart(&CartClick::new(ListId::Discount, product.id.clone()))?;

    let catalog = FixtureCatalog::new(ctx.fixture.clone()).failing(CatalogSource::Popular);
    let storefront = ctx.storefront_with(catalog, store, ctx.config.clone());
    let report = visit(&storefront).await?;
    ensure!(
        report.failures() == vec![CatalogSource::Popular],
        "unexpected failures {:?}",
        report.failures()
    );
    ensure!(storefront.popular().is_empty(), "failed list was rendered");
    ensure!(
        storefront.board().is_added(ListId::Discount, &product.id),
        "cart state missing on the discount list"
    );

    storefront.api().recover(CatalogSource::Popular);
    let report = visit(&storefront).await?;
    ensure!(report.all_ready(), "popular list did not recover");
    Ok(())
}

pub async fn page_limit_reset(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let storefront = ctx.storefront(store.clone());
    let filter = storefront.init_filter()?;
    storefront.apply_filter(&filter.with_page(2)).await?;

    let wider = ctx.config.clone().with_page_limit(ctx.config.page_limit + 3);
    let resized = ctx.storefront_with(FixtureCatalog::new(ctx.fixture.clone()), store, wider);
    let restored = resized.init_filter()?;
    ensure!(restored.page == 1, "paging did not restart");
    ensure!(
        restored.limit == resized.config().page_limit,
        "stored limit {} was not updated",
        restored.limit
    );

    ensure!(
        !resized.set_page_limit(restored.limit).await?,
        "unchanged limit triggered a reload"
    );
    ensure!(
        resized.set_page_limit(ctx.config.page_limit).await?,
        "changed limit was not applied"
    );
    Ok(())
}

pub async fn filter_paging(ctx: &ScenarioCtx) -> Result<()> {
    let storefront = ctx.storefront(MemoryStore::new());
    visit(&storefront).await?;
    let first = storefront.products();
    if !first.has_next() {
        return Ok(());
    }

    let Some(product) = storefront.popular().first().cloned() else {
        bail!("fixture has no popular products");
    };
    storefront.add_to_cart(&CartClick::new(ListId::Popular, product.id.clone()))?;

    let Some(filter) = storefront.filter() else {
        bail!("filter was not stored");
    };
    let next = filter.with_page(first.page + 1);
    storefront.apply_filter(&next).await?;
    ensure!(storefront.filter() == Some(next), "filter was not persisted");

    let page = storefront.products();
    ensure!(page.page == first.page + 1, "catalog did not advance");
    let board = storefront.board();
    if page.results.iter().any(|p| p.id == product.id) {
        ensure!(
            board.is_added(ListId::Product, &product.id),
            "cart product not marked on the new page"
        );
    }
    ensure!(
        board
            .added_ids(ListId::Product)
            .iter()
            .all(|id| *id == product.id),
        "unexpected added buttons on the new page"
    );
    Ok(())
}
