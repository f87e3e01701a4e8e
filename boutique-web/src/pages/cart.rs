use crate::components::cart_list::CartList;
use boutique_core::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cart: Vec<Product>,
    pub on_remove: Callback<String>,
}

#[function_component(CartPage)]
pub fn cart_page(p: &Props) -> Html {
    html! {
        <div class="content-wrapper cart-page">
            <CartList products={p.cart.clone()} on_remove={p.on_remove.clone()} />
        </div>
    }
}
