use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::animation::{use_entrance, Ease, Timeline, Tween};
use crate::components::background::Background;
use crate::plans::catalog::{PlanTier, PLAN_TIERS};
use crate::plans::wizard::{Action, Answers, ComfortLevel, Goal, Step, Wizard};
use crate::viewport;

/// Header, one block per tier and the back button.
const REVEAL_BLOCKS: usize = 2 + PLAN_TIERS.len();
const REVEAL_STAGGER: f64 = 0.15;

fn questionnaire_entrance() -> Timeline {
    Timeline::new().add(0, 0.0, Tween::entrance(60.0, 1.2).delay(0.3).ease(Ease::Power3Out))
}

fn recommendation_reveal() -> Timeline {
    Timeline::staggered(
        REVEAL_BLOCKS,
        REVEAL_STAGGER,
        Tween::entrance(60.0, 0.8).ease(Ease::Power3Out).snap_opacity(),
    )
}

fn dispatch(wizard: &UseStateHandle<Wizard>, action: Action<'_>) {
    let current = **wizard;
    let transition = current.apply(action);
    if transition.scroll_to_top {
        viewport::smooth_scroll_to_top();
    }
    if transition.step_changed {
        log::debug!("step {:?} -> {:?}, answers: {:?}", current.step, transition.next.step, transition.next.answers);
    }
    if transition.next != current {
        wizard.set(transition.next);
    }
}

#[function_component(Plans)]
pub fn plans() -> Html {
    let wizard = use_state(Wizard::default);

    let on_answer = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let (field, value) = (input.name(), input.value());
            dispatch(&wizard, Action::Answer { field: &field, value: &value });
        })
    };

    let on_submit = {
        let wizard = wizard.clone();
        Callback::from(move |_: ()| dispatch(&wizard, Action::Submit))
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: ()| dispatch(&wizard, Action::GoBack))
    };

    html! {
        <div class="plans-page">
            <Background />
            <div class="page-content">
                {
                    match wizard.step {
                        Step::Questionnaire => html! {
                            <Questionnaire answers={wizard.answers} on_answer={on_answer} on_submit={on_submit} />
                        },
                        Step::Recommendation => html! {
                            <Recommendation on_back={on_back} />
                        },
                    }
                }
            </div>
            <style>
                {r#"
                .plans-page {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .questionnaire {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .questionnaire form {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .question {
                    margin-bottom: 3rem;
                }
                .question h3 {
                    color: #fff;
                    font-weight: 500;
                    font-size: 1.5rem;
                    text-align: center;
                    margin: 0 0 2rem;
                }
                .options {
                    display: grid;
                    gap: 1rem;
                }
                .option {
                    display: block;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-weight: 500;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .option:hover {
                    background: rgba(255, 255, 255, 0.15);
                }
                .option.selected {
                    background: #ff7043;
                    border-color: #ff7043;
                }
                .option input {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                .plan-grid {
                    max-width: 72rem;
                    margin: 0 auto 4rem;
                    display: grid;
                    gap: 2rem;
                }
                .plan-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                }
                .plan-card.featured {
                    border: 2px solid var(--accent);
                }
                .plan-card__badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: var(--accent);
                    color: #fff;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 1px;
                }
                .plan-card__header {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .plan-card__header .icon-badge {
                    background: var(--accent);
                    margin-bottom: 1.5rem;
                }
                .plan-card__header h3 {
                    color: #fff;
                    font-weight: 500;
                    font-size: 1.875rem;
                    margin: 0 0 1rem;
                }
                .plan-card__price {
                    color: #fff;
                    font-weight: 500;
                    font-size: 3rem;
                }
                .plan-card__period {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.25rem;
                    margin-left: 0.5rem;
                }
                .plan-card__features {
                    flex: 1;
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }
                .plan-card__features li {
                    display: flex;
                    align-items: center;
                    color: #fff;
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .plan-card__features svg {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                    margin-right: 0.75rem;
                    color: var(--accent);
                }
                .plan-card__cta {
                    width: 100%;
                    padding: 1rem 0;
                    border: none;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #fff;
                    font-family: inherit;
                    font-weight: 500;
                    font-size: 1.25rem;
                    letter-spacing: 1px;
                    cursor: pointer;
                    transition: background-color 0.3s;
                }
                .plan-card__cta:hover {
                    background: var(--accent-hover);
                }
                @media (min-width: 1024px) {
                    .question h3 {
                        font-size: 1.875rem;
                    }
                    .plan-grid {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                    }
                    .plan-card__header h3 {
                        font-size: 2.25rem;
                    }
                    .plan-card__price {
                        font-size: 3.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct QuestionnaireProps {
    answers: Answers,
    on_answer: Callback<Event>,
    on_submit: Callback<()>,
}

#[function_component(Questionnaire)]
fn questionnaire(props: &QuestionnaireProps) -> Html {
    let form_ref = use_node_ref();
    use_entrance(vec![form_ref.clone()], questionnaire_entrance());

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let comfort_options: Vec<QuestionOption> = ComfortLevel::ALL
        .into_iter()
        .map(|level| QuestionOption {
            value: level.as_str(),
            label: level.label(),
            selected: props.answers.comfort_level == Some(level),
        })
        .collect();

    let goal_options: Vec<QuestionOption> = Goal::ALL
        .into_iter()
        .map(|goal| QuestionOption {
            value: goal.as_str(),
            label: goal.label(),
            selected: props.answers.goal == Some(goal),
        })
        .collect();

    html! {
        <div ref={form_ref} class="entrance questionnaire">
            <div class="page-header">
                <h1 class="page-title shadow-soft">{"Find Your Perfect Plan"}</h1>
                <p class="lead shadow-strong">
                    {"Let's find the training program that's right for you. Answer a couple questions to get personalized recommendations."}
                </p>
            </div>

            <form {onsubmit}>
                <Question
                    name="comfortLevel"
                    title="How comfortable are you in the water?"
                    options={comfort_options}
                    onchange={props.on_answer.clone()}
                />
                <Question
                    name="goal"
                    title="What's your biggest swimming goal right now?"
                    options={goal_options}
                    onchange={props.on_answer.clone()}
                />

                <div class="centered">
                    <button
                        type="submit"
                        class="pill-button pill-button--accent pill-button--large"
                        disabled={!props.answers.is_complete()}
                    >
                        {"See My Plans"}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct QuestionOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Properties, PartialEq)]
struct QuestionProps {
    name: &'static str,
    title: &'static str,
    options: Vec<QuestionOption>,
    onchange: Callback<Event>,
}

#[function_component(Question)]
fn question(props: &QuestionProps) -> Html {
    html! {
        <div class="question">
            <h3 class="shadow-soft">{props.title}</h3>
            <div class="options">
                {
                    for props.options.iter().map(|option| html! {
                        <label key={option.value} class={classes!("option", option.selected.then(|| "selected"))}>
                            <input
                                type="radio"
                                name={props.name}
                                value={option.value}
                                checked={option.selected}
                                onchange={props.onchange.clone()}
                            />
                            <span>{option.label}</span>
                        </label>
                    })
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RecommendationProps {
    on_back: Callback<()>,
}

#[function_component(Recommendation)]
fn recommendation(props: &RecommendationProps) -> Html {
    let header_ref = use_node_ref();
    let starter_ref = use_node_ref();
    let pro_ref = use_node_ref();
    let elite_ref = use_node_ref();
    let back_ref = use_node_ref();

    let card_refs = [starter_ref.clone(), pro_ref.clone(), elite_ref.clone()];
    use_entrance(
        vec![header_ref.clone(), starter_ref, pro_ref, elite_ref, back_ref.clone()],
        recommendation_reveal(),
    );

    let onclick = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div>
            <div ref={header_ref} class="entrance page-header">
                <h1 class="page-title shadow-soft">{"Choose Your Plan"}</h1>
                <p class="lead shadow-strong">
                    {"Based on your answers, here are our recommended training programs designed to help you achieve your swimming goals."}
                </p>
            </div>

            <div class="plan-grid">
                {
                    for PLAN_TIERS.iter().zip(card_refs).map(|(tier, node_ref)| html! {
                        <PlanCard key={tier.name} tier={*tier} node_ref={node_ref} />
                    })
                }
            </div>

            <div ref={back_ref} class="entrance centered">
                <button class="pill-button pill-button--ghost" {onclick}>
                    {"← Back to Questions"}
                </button>
            </div>
        </div>
    }
}

const CHECK_ICON: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z";

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    tier: PlanTier,
    node_ref: NodeRef,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let tier = &props.tier;
    let accent = format!("--accent: {}; --accent-hover: {};", tier.accent, tier.accent_hover);

    html! {
        <div
            ref={props.node_ref.clone()}
            class={classes!("entrance", "glass-card", "plan-card", tier.is_featured().then(|| "featured"))}
            style={accent}
        >
            {
                if let Some(badge) = tier.badge {
                    html! { <div class="plan-card__badge">{badge}</div> }
                } else {
                    html! {}
                }
            }
            <div class="plan-card__header">
                <div class="icon-badge">
                    <svg viewBox="0 0 24 24" fill="currentColor">
                        <path d={tier.icon.svg_path()} />
                    </svg>
                </div>
                <h3 class="shadow-soft">{tier.name}</h3>
                <div>
                    <span class="plan-card__price shadow-soft">{tier.price_label()}</span>
                    <span class="plan-card__period shadow-strong">{"/month"}</span>
                </div>
            </div>

            <ul class="plan-card__features">
                {
                    for tier.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <svg viewBox="0 0 24 24" fill="currentColor">
                                <path d={CHECK_ICON} />
                            </svg>
                            <span class="shadow-strong">{*feature}</span>
                        </li>
                    })
                }
            </ul>

            <button class="plan-card__cta">{tier.cta_label}</button>
        </div>
    }
}
