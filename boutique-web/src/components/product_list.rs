//! One rendered product list (catalog, popular or discount) with its cart buttons.
use boutique_core::{ButtonBoard, CartClick, ListId, Product};
use yew::prelude::*;

pub const IS_ADDED_CLASS: &str = "is-added";
pub const BTN_CART_CLASS: &str = "js-add-btn";
pub const CARD_LI_CLASS: &str = "js-card-item";
pub const LOADER_CLASS: &str = "js-loader";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub list: ListId,
    pub products: Vec<Product>,
    pub board: ButtonBoard,
    #[prop_or_default]
    pub loading: bool,
    pub on_add: Callback<CartClick>,
}

#[must_use]
pub const fn list_class(list: ListId) -> &'static str {
    match list {
        ListId::Product => "product-card-list",
        ListId::Popular => "popular-list",
        ListId::Discount => "discount-list",
    }
}

#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[function_component(ProductList)]
pub fn product_list(p: &Props) -> Html {
    html! {
        <ul class={classes!(list_class(p.list), p.loading.then_some(LOADER_CLASS))}
            data-ls-name={p.list.ls_name()}
            aria-busy={p.loading.to_string()}>
            { for p.products.iter().map(|product| render_card(p, product)) }
        </ul>
    }
}

fn render_card(p: &Props, product: &Product) -> Html {
    let added = p.board.is_added(p.list, &product.id);
    let on_click = {
        let cb = p.on_add.clone();
        let click = CartClick::new(p.list, product.id.clone());
        Callback::from(move |_: MouseEvent| cb.emit(click.clone()))
    };
    let category = product.category.replace('_', " ");

    html! {
        <li class={CARD_LI_CLASS} data-id={product.id.clone()}>
            <img class="card-img" src={product.img.clone()} alt={product.name.clone()} loading="lazy" />
            <div class="card-body">
                <h3 class="card-name">{ product.name.clone() }</h3>
                { if p.list == ListId::Popular {
                    Html::default()
                } else {
                    html! { <p class="card-category">{ category }</p> }
                } }
                <p class="card-size">{ product.size.clone() }</p>
                { if product.is_10_percent_off {
                    html! { <span class="card-discount-badge" aria-label="10% off">{ "-10%" }</span> }
                } else {
                    Html::default()
                } }
                <span class="card-price">{ format_price(product.price) }</span>
            </div>
            <button type="button"
                class={classes!(
                    BTN_CART_CLASS,
                    (p.list == ListId::Popular).then_some("popular-btn"),
                    added.then_some(IS_ADDED_CLASS)
                )}
                aria-pressed={added.to_string()}
                aria-label={format!("Add {} to cart", product.name)}
                onclick={on_click}>
                { if added { "In cart" } else { "Add to cart" } }
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            img: format!("https://img.test/{id}.png"),
            category: "Fresh_Produce".to_string(),
            price: 1.5,
            size: "1 each".to_string(),
            is_10_percent_off: id == "b",
            popularity: 3,
        }
    }

    #[test]
    fn cards_reflect_button_board() {
        let mut board = ButtonBoard::new();
        board.render_list(ListId::Discount, ["a", "b"]);
        board.set_cart_state_for_all_products(["b"]);
        let props = Props {
            list: ListId::Discount,
            products: vec![product("a", "Apple"), product("b", "Banana")],
            board,
            loading: false,
            on_add: Callback::noop(),
        };

        let html = block_on(LocalServerRenderer::<ProductList>::with_props(props).render());
        assert!(html.contains("data-ls-name=\"discount\""), "{html}");
        assert!(html.contains("data-id=\"a\""), "{html}");
        assert_eq!(html.matches(IS_ADDED_CLASS).count(), 1, "{html}");
        assert!(html.contains("In cart"), "{html}");
        assert!(html.contains("Fresh Produce"), "{html}");
        assert!(html.contains("$1.50"), "{html}");
        assert!(html.contains("-10%"), "{html}");
    }

    #[test]
    fn loading_list_carries_loader_class() {
        let props = Props {
            list: ListId::Popular,
            products: vec![],
            board: ButtonBoard::new(),
            loading: true,
            on_add: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ProductList>::with_props(props).render());
        assert!(html.contains("popular-list"), "{html}");
        assert!(html.contains(LOADER_CLASS), "{html}");
    }
}
