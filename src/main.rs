use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod animation;
mod assets;
mod config;
mod viewport;
mod components {
    pub mod background;
    pub mod nav;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
    pub mod plans;
}
mod plans {
    pub mod catalog;
    pub mod wizard;
}

use components::nav::Nav;
use pages::{
    about::About,
    home::Home,
    not_found::NotFound,
    plans::Plans,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/plans")]
    Plans,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Plans => {
            info!("Rendering Plans page");
            html! { <Plans /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Router prefix matching the deployment base path, if there is one.
fn router_basename() -> Option<AttrValue> {
    let base = config::get_base_path().trim_end_matches('/');
    (!base.is_empty()).then(|| AttrValue::from(base))
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter basename={router_basename()}>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application under base path {:?}", config::get_base_path());
    yew::Renderer::<App>::new().render();
}
