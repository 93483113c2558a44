use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{use_entrance, Ease, Timeline, Tween};
use crate::components::background::Background;
use crate::viewport;
use crate::Route;

fn hero_entrance() -> Timeline {
    Timeline::new()
        .add(0, 0.0, Tween::entrance(100.0, 1.5).ease(Ease::Power3Out))
        .add(1, 0.0, Tween::entrance(50.0, 1.2).delay(0.5).ease(Ease::Power3Out))
        .add(2, 0.0, Tween::entrance(30.0, 1.0).delay(0.7).ease(Ease::Power3Out))
}

#[function_component(Home)]
pub fn home() -> Html {
    let headline_ref = use_node_ref();
    let paragraph_ref = use_node_ref();
    let subtitle_ref = use_node_ref();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        |_| {
            viewport::scroll_to_top();
            || ()
        },
        (),
    );

    use_entrance(
        vec![headline_ref.clone(), paragraph_ref.clone(), subtitle_ref.clone()],
        hero_entrance(),
    );

    html! {
        <div class="home">
            <Background />
            <section class="hero">
                <div ref={headline_ref} class="entrance hero__headline">
                    <h1 class="shadow-soft">{"Dive In"}</h1>
                </div>
                <div ref={paragraph_ref} class="entrance hero__copy">
                    <p class="shadow-strong">
                        {"Transform your technique and discover what you're truly capable of."}
                    </p>
                </div>
                <div ref={subtitle_ref} class="entrance hero__copy hero__copy--last">
                    <p class="shadow-strong">
                        {"Get personalized training plans from our experienced coaches"}
                    </p>
                </div>

                <div class="hero__actions">
                    <Link<Route> to={Route::Plans} classes="pill-button pill-button--accent">
                        {"Begin Training"}
                    </Link<Route>>
                    <Link<Route> to={Route::About} classes="pill-button pill-button--outline">
                        {"About us"}
                    </Link<Route>>
                </div>
            </section>
            <style>
                {r#"
                .home {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .hero {
                    position: relative;
                    z-index: 10;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #fff;
                    padding: 0 1rem;
                }
                .hero__headline {
                    margin-bottom: 2rem;
                }
                .hero__headline h1 {
                    font-weight: 400;
                    font-size: 120px;
                    line-height: normal;
                    margin: 0;
                }
                .hero__copy {
                    margin-bottom: 1rem;
                }
                .hero__copy--last {
                    margin-bottom: 3rem;
                }
                .hero__copy p {
                    font-weight: 500;
                    font-size: 1.125rem;
                    opacity: 0.8;
                    max-width: 828px;
                    margin: 0;
                }
                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    align-items: center;
                    width: 100%;
                    max-width: 72rem;
                }
                .hero__actions .pill-button {
                    width: 100%;
                    min-width: 200px;
                    font-size: 1.25rem;
                    letter-spacing: 2px;
                }
                @media (min-width: 640px) {
                    .hero__actions {
                        flex-direction: row;
                        justify-content: center;
                    }
                    .hero__actions .pill-button {
                        width: auto;
                        min-width: 280px;
                        font-size: 1.5rem;
                    }
                }
                @media (min-width: 1024px) {
                    .hero__headline {
                        margin-bottom: 4rem;
                    }
                    .hero__headline h1 {
                        font-size: 180px;
                    }
                    .hero__copy p {
                        font-size: 24px;
                    }
                    .hero__copy--last {
                        margin-bottom: 5rem;
                    }
                    .hero__actions .pill-button {
                        font-size: 26px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
