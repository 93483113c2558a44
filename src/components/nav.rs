use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::assets::asset_path;
use crate::Route;

const LINKS: [(Route, &str); 2] = [(Route::About, "About us"), (Route::Plans, "See Plans")];

#[function_component(Nav)]
pub fn nav() -> Html {
    let current = use_route::<Route>();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // The home hero runs full-height underneath the bar
    let overlay = current == Some(Route::Home);

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", overlay.then(|| "overlay"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={asset_path("/assets/O2Logo.svg")} alt="O2 Swimming Coach Logo" width="80" height="80" />
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for LINKS.iter().map(|(route, label)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: relative;
                    z-index: 30;
                    height: 95px;
                }
                .top-nav.overlay {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 100%;
                    padding: 0 1rem;
                }
                .nav-logo {
                    flex-shrink: 0;
                    transition: opacity 0.3s;
                }
                .nav-logo:hover {
                    opacity: 0.9;
                }
                .nav-logo img {
                    object-fit: cover;
                    width: 80px;
                    height: 80px;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }
                .nav-link {
                    font-size: 20px;
                    line-height: 1;
                    color: #fff;
                    text-decoration: none;
                    white-space: nowrap;
                    padding-bottom: 4px;
                    border-bottom: 2px solid transparent;
                    transition: opacity 0.3s;
                }
                .nav-link:hover {
                    opacity: 0.8;
                }
                .nav-link.active {
                    border-bottom-color: #ff7043;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (min-width: 1024px) {
                    .nav-content {
                        padding: 0 4rem 0 154px;
                    }
                    .nav-logo img {
                        width: 122px;
                        height: 122px;
                    }
                    .nav-links {
                        gap: 11rem;
                    }
                    .nav-link {
                        font-size: 22px;
                    }
                }
                @media (max-width: 767px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 95px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 1.5rem 0;
                        background: rgba(9, 16, 36, 0.95);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
