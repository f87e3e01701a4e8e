use super::product_list::format_price;
use boutique_core::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub products: Vec<Product>,
    pub on_remove: Callback<String>,
}

#[must_use]
pub fn cart_total(products: &[Product]) -> f64 {
    products.iter().map(|product| product.price).sum()
}

#[function_component(CartList)]
pub fn cart_list(p: &Props) -> Html {
    if p.products.is_empty() {
        return html! {
            <section class="cart-empty" aria-live="polite">
                <h2>{ "Your basket is empty..." }</h2>
                <p>{ "Go to the main page to select your favorite products and add them to the cart." }</p>
            </section>
        };
    }

    html! {
        <section class="cart" aria-labelledby="cart-title">
            <h2 id="cart-title">{ format!("Cart ({})", p.products.len()) }</h2>
            <ul class="cart-list">
                { for p.products.iter().map(|product| {
                    let on_remove = {
                        let cb = p.on_remove.clone();
                        let id = product.id.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                    };
                    html! {
                        <li class="cart-item" data-id={product.id.clone()}>
                            <img class="cart-img" src={product.img.clone()} alt={product.name.clone()} />
                            <span class="cart-name">{ product.name.clone() }</span>
                            <span class="cart-price">{ format_price(product.price) }</span>
                            <button type="button" class="cart-remove-btn"
                                aria-label={format!("Remove {} from cart", product.name)}
                                onclick={on_remove}>{ "×" }</button>
                        </li>
                    }
                }) }
            </ul>
            <p class="cart-total">{ format!("Total: {}", format_price(cart_total(&p.products))) }</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn empty_cart_renders_placeholder() {
        let props = Props {
            products: vec![],
            on_remove: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CartList>::with_props(props).render());
        assert!(html.contains("cart-empty"), "{html}");
    }

    #[test]
    fn cart_lists_products_with_total() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"_id":"a","name":"Apple","price":1.25},{"_id":"b","name":"Beet","price":2.5}]"#,
        )
        .unwrap();
        assert!((cart_total(&products) - 3.75).abs() < f64::EPSILON);
        let props = Props {
            products,
            on_remove: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CartList>::with_props(props).render());
        assert!(html.contains("Cart (2)"), "{html}");
        assert!(html.contains("Total: $3.75"), "{html}");
        assert_eq!(html.matches("cart-remove-btn").count(), 2, "{html}");
    }
}
