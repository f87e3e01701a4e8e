use crate::config::page_href;
use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <a href={page_href("/")}>{ "Back to the shop" }</a>
        </section>
    }
}
