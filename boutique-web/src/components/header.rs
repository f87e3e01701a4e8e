use crate::config::page_href;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Number of products in the persisted cart.
    pub cart_count: usize,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner" class="header">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <a class="header-logo" href={page_href("/")}>{ "Food Boutique" }</a>
                <nav aria-label="Main" class="header-nav">
                    <a class="header-nav-link" href={page_href("/")}>{ "Home" }</a>
                    <a class="header-nav-link header-cart" href={page_href("cart")}>
                        { "Cart (" }
                        <span class="js-header-navSpan" aria-live="polite">{ p.cart_count }</span>
                        { ")" }
                    </a>
                </nav>
            </div>
        </header>
    }
}
