use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{use_entrance, Ease, Timeline, Tween};
use crate::components::background::Background;
use crate::viewport;
use crate::Route;

const SECTION_STAGGER: f64 = 0.3;

fn sections_entrance(count: usize) -> Timeline {
    Timeline::staggered(count, SECTION_STAGGER, Tween::entrance(60.0, 1.0).ease(Ease::Power3Out))
}

#[derive(Properties, PartialEq)]
struct ImagePlaceholderProps {
    caption: &'static str,
    icon_path: &'static str,
}

#[function_component(ImagePlaceholder)]
fn image_placeholder(props: &ImagePlaceholderProps) -> Html {
    html! {
        <div class="photo-frame">
            <div class="photo-frame__inner">
                <svg viewBox="0 0 24 24" fill="currentColor">
                    <path d={props.icon_path} />
                </svg>
                <p>{props.caption}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    title: &'static str,
    accent: &'static str,
    icon_path: &'static str,
    children: Children,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="glass-card service-card">
            <div class="icon-badge" style={format!("background: {};", props.accent)}>
                <svg viewBox="0 0 24 24" fill="currentColor">
                    <path d={props.icon_path} />
                </svg>
            </div>
            <h3 class="shadow-soft">{props.title}</h3>
            <p class="shadow-strong">{ for props.children.iter() }</p>
        </div>
    }
}

const PERSON_ICON: &str = "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z";
const CHECK_ICON: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z";
const LIST_ICON: &str = "M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm-5 14H7v-2h7v2zm3-4H7v-2h10v2zm0-4H7V7h10v2z";
const TRENDING_ICON: &str = "M16 6l2.29 2.29-4.88 4.88-4-4L2 16.59 3.41 18l6-6 4 4 6.3-6.29L22 12V6z";

#[function_component(About)]
pub fn about() -> Html {
    let coach_ref = use_node_ref();
    let club_ref = use_node_ref();
    let offer_ref = use_node_ref();

    use_effect_with_deps(
        |_| {
            viewport::scroll_to_top();
            || ()
        },
        (),
    );

    use_entrance(
        vec![coach_ref.clone(), club_ref.clone(), offer_ref.clone()],
        sections_entrance(3),
    );

    html! {
        <div class="about-page">
            <Background />
            <div class="page-content">
                <section ref={coach_ref} class="entrance about-section">
                    <h2 class="section-title shadow-soft">{"Meet the Coach"}</h2>
                    <div class="split">
                        <div class="split__text">
                            <p class="shadow-strong">
                                {"With over 15 years of competitive swimming experience and 8 years of professional coaching, I'm dedicated to helping swimmers of all levels reach their full potential in the water."}
                            </p>
                            <p class="shadow-strong">
                                {"My approach combines technical precision with mental conditioning, ensuring every athlete develops both the physical skills and confidence needed to excel in competitive swimming."}
                            </p>
                            <p class="shadow-strong">
                                {"From beginners learning proper stroke mechanics to elite athletes preparing for championships, I create personalized training programs that deliver measurable results."}
                            </p>
                        </div>
                        <ImagePlaceholder caption="Coach Photo" icon_path={PERSON_ICON} />
                    </div>
                </section>

                <section ref={club_ref} class="entrance about-section">
                    <h2 class="section-title shadow-soft">{"About O2 SwimFit"}</h2>
                    <div class="split split--reversed">
                        <ImagePlaceholder caption="O2 SwimFit Facility" icon_path={CHECK_ICON} />
                        <div class="split__text">
                            <p class="shadow-strong">
                                {"O2 SwimFit was founded with a simple mission: to create a supportive environment where swimmers can achieve their personal best while developing a lifelong love for the sport."}
                            </p>
                            <p class="shadow-strong">
                                {"Our state-of-the-art training facility features Olympic-standard pools, advanced video analysis equipment, and specialized training tools that help swimmers perfect their technique and build endurance."}
                            </p>
                            <p class="shadow-strong">
                                {"We believe that every swimmer deserves personalized attention and a training program tailored to their unique goals, whether that's mastering the basics or competing at the highest levels."}
                            </p>
                        </div>
                    </div>
                </section>

                <section ref={offer_ref} class="entrance about-section about-section--last">
                    <h2 class="section-title shadow-soft">{"What We Offer"}</h2>
                    <div class="service-grid">
                        <ServiceCard title="Technique Analysis" accent="#ff7043" icon_path={CHECK_ICON}>
                            {"Advanced video analysis and real-time feedback to perfect your stroke mechanics and improve efficiency in the water."}
                        </ServiceCard>
                        <ServiceCard title="Training Programs" accent="#00bcd4" icon_path={LIST_ICON}>
                            {"Personalized training plans designed to meet your specific goals, from fitness swimming to competitive racing."}
                        </ServiceCard>
                        <ServiceCard title="Performance Coaching" accent="#ff7043" icon_path={TRENDING_ICON}>
                            {"Mental conditioning and race strategy development to help you perform at your peak when it matters most."}
                        </ServiceCard>
                    </div>
                    <div class="centered">
                        <Link<Route> to={Route::Plans} classes="pill-button pill-button--accent pill-button--large">
                            {"See Plans"}
                        </Link<Route>>
                    </div>
                </section>
            </div>
            <style>
                {r#"
                .about-page {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .about-section {
                    margin-bottom: 8rem;
                }
                .about-section--last {
                    margin-bottom: 4rem;
                }
                .split {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .split__text p {
                    color: #fff;
                    font-weight: 500;
                    font-size: 1.125rem;
                    line-height: 1.625;
                    margin: 0 0 1.5rem;
                }
                .photo-frame {
                    position: relative;
                    height: 24rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: rgba(31, 41, 55, 0.5);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .photo-frame__inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    color: rgba(255, 255, 255, 0.6);
                }
                .photo-frame__inner svg {
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1rem;
                }
                .service-grid {
                    display: grid;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .service-card {
                    text-align: center;
                }
                .service-card h3 {
                    color: #fff;
                    font-weight: 500;
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }
                .service-card p {
                    color: #fff;
                    font-size: 1.125rem;
                    line-height: 1.625;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .service-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                @media (min-width: 1024px) {
                    .about-section {
                        margin-bottom: 12rem;
                    }
                    .split {
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .split__text p {
                        font-size: 1.5rem;
                    }
                    .photo-frame {
                        height: 500px;
                    }
                    .service-grid {
                        gap: 3rem;
                    }
                    .service-card h3 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
