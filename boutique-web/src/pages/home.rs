use crate::components::product_list::ProductList;
use boutique_core::{CartClick, ListId, ListStatus, LoadReport, Snapshot};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub snapshot: Snapshot,
    pub report: LoadReport,
    pub on_add: Callback<CartClick>,
}

fn list_section(p: &Props, list: ListId, title: &'static str, status: &ListStatus) -> Html {
    let failed = matches!(status, ListStatus::Failed(_));
    html! {
        <section class={classes!("products-section", format!("{}-section", list.ls_name()))}
            aria-label={title}>
            <h2 class="section-title">{ title }</h2>
            if failed {
                <p class="list-error" role="status">{ "Products could not be loaded. Please try again later." }</p>
            }
            <ProductList
                list={list}
                products={p.snapshot.list(list).to_vec()}
                board={p.snapshot.board.clone()}
                loading={status.is_loading()}
                on_add={p.on_add.clone()}
            />
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let page = &p.snapshot.products;
    html! {
        <div class="content-wrapper">
            <div class="products-wrapper">
                { list_section(p, ListId::Product, "Products", &p.report.products) }
                if page.total_pages > 1 {
                    <p class="page-indicator">{ format!("Page {} of {}", page.page, page.total_pages) }</p>
                }
            </div>
            <aside class="aside">
                { list_section(p, ListId::Popular, "Popular products", &p.report.popular) }
                { list_section(p, ListId::Discount, "Discount products", &p.report.discount) }
            </aside>
        </div>
    }
}
