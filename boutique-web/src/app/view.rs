use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::header::Header;
use crate::pages::{cart::CartPage, home::HomePage, not_found::NotFound};
use crate::router::Route;
use boutique_core::{CartClick, LoadReport, Snapshot};
use yew::prelude::*;

pub fn render_app(state: &AppState, route: Option<&Route>) -> Html {
    let handlers = AppHandlers::new(state);
    html! {
        <>
            <Header cart_count={state.cart_count()} />
            <main id="main" role="main">
                if let Some(notice) = (*state.notice).clone() {
                    <p class="notice" role="alert">{ notice.to_string() }</p>
                }
                { render_route(route, &state.snapshot, &state.report, &handlers.add_to_cart, &handlers.remove_from_cart) }
            </main>
        </>
    }
}

pub fn render_route(
    route: Option<&Route>,
    snapshot: &Snapshot,
    report: &LoadReport,
    on_add: &Callback<CartClick>,
    on_remove: &Callback<String>,
) -> Html {
    match route {
        Some(Route::Home) => html! {
            <HomePage snapshot={snapshot.clone()} report={report.clone()} on_add={on_add.clone()} />
        },
        Some(Route::Cart) => html! {
            <CartPage cart={snapshot.cart.clone()} on_remove={on_remove.clone()} />
        },
        Some(Route::NotFound) | None => html! { <NotFound /> },
    }
}
