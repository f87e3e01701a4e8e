use anyhow::{Result, bail, ensure};
use boutique_core::{CartClick, CartOutcome, ListId, MemoryStore};

use super::{ScenarioCtx, rendering_lists, shared_product, visit};

pub async fn cross_list_sync(ctx: &ScenarioCtx) -> Result<()> {
    let storefront = ctx.storefront(MemoryStore::new());
    visit(&storefront).await?;
    let id = shared_product(&storefront)?;
    let lists = rendering_lists(&storefront, &id);
    let Some(&from) = lists.last() else {
        bail!("{id} is not rendered");
    };

    let outcome = storefront.add_to_cart(&CartClick::new(from, id.clone()))?;
    ensure!(
        outcome == CartOutcome::Added { count: 1 },
        "unexpected outcome {outcome:?}"
    );
    let board = storefront.board();
    for list in lists {
        ensure!(
            board.is_added(list, &id),
            "{id} not marked added in the {} list",
            list.ls_name()
        );
    }
    Ok(())
}

pub async fn duplicate_click_ignored(ctx: &ScenarioCtx) -> Result<()> {
    let storefront = ctx.storefront(MemoryStore::new());
    visit(&storefront).await?;
    let id = shared_product(&storefront)?;
    let lists = rendering_lists(&storefront, &id);

    storefront.add_to_cart(&CartClick::new(lists[0], id.clone()))?;
    for list in lists {
        let outcome = storefront.add_to_cart(&CartClick::new(list, id.clone()))?;
        ensure!(
            outcome == CartOutcome::Ignored,
            "click in the {} list was not ignored",
            list.ls_name()
        );
    }
    ensure!(
        storefront.cart_count() == 1,
        "cart holds {} products",
        storefront.cart_count()
    );
    Ok(())
}

pub async fn persisted_cart_restored(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let first = ctx.storefront(store.clone());
    visit(&first).await?;
    let id = shared_product(&first)?;
    first.add_to_cart(&CartClick::new(rendering_lists(&first, &id)[0], id.clone()))?;

    let returning = ctx.storefront(store);
    visit(&returning).await?;
    ensure!(returning.cart_count() == 1, "cart was not restored");
    let board = returning.board();
    for list in rendering_lists(&returning, &id) {
        ensure!(
            board.is_added(list, &id),
            "{id} not restored as added in the {} list",
            list.ls_name()
        );
    }
    Ok(())
}

pub async fn remove_from_cart(ctx: &ScenarioCtx) -> Result<()> {
    let storefront = ctx.storefront(MemoryStore::new());
    visit(&storefront).await?;
    let id = shared_product(&storefront)?;
    let lists = rendering_lists(&storefront, &id);
    storefront.add_to_cart(&CartClick::new(lists[0], id.clone()))?;

    let remaining = storefront.remove_from_cart(&id)?;
    ensure!(remaining == 0, "cart still holds {remaining} products");
    let board = storefront.board();
    ensure!(
        ListId::ALL.iter().all(|list| !board.is_added(*list, &id)),
        "{id} still marked added after removal"
    );
    let outcome = storefront.add_to_cart(&CartClick::new(lists[0], id))?;
    ensure!(
        matches!(outcome, CartOutcome::Added { .. }),
        "released button did not accept a click"
    );
    Ok(())
}
