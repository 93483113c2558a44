use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::background::Background;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <Background />
            <div class="page-content centered">
                <h1 class="section-title shadow-soft">{"Out of the Pool"}</h1>
                <p class="lead shadow-strong">{"This page doesn't exist. Let's get you back to the deep end."}</p>
                <Link<Route> to={Route::Home} classes="pill-button pill-button--accent">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
