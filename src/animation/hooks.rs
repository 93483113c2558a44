use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::context::{AnimationContext, Playback};
use super::timeline::Timeline;

const FRAME_MS: u32 = 16;

/// Class that keeps an animated block hidden until its first frame.
const ENTRANCE_CLASS: &str = "entrance";

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default()
}

/// `class` with every occurrence of `name` removed.
fn without_class(class: &str, name: &str) -> String {
    class.split_whitespace().filter(|c| *c != name).collect::<Vec<_>>().join(" ")
}

/// Makes an element the animation cannot drive visible at its resting pose.
fn reveal(element: &Element) {
    let class = element.class_name();
    let stripped = without_class(&class, ENTRANCE_CLASS);
    if stripped != class {
        element.set_class_name(&stripped);
    }
}

/// Plays `timeline` over the elements behind `refs` once, when the calling
/// component mounts. Track `i` of the timeline drives `refs[i]`. The ticker
/// stops on the last frame; unmounting stops it early and reverts every
/// animated element.
#[hook]
pub fn use_entrance(refs: Vec<NodeRef>, timeline: Timeline) {
    use_effect_once(move || {
        let mut targets: Vec<(usize, HtmlElement)> = Vec::with_capacity(refs.len());
        for (index, node) in refs.iter().enumerate() {
            match node.cast::<HtmlElement>() {
                Some(element) => targets.push((index, element)),
                None => {
                    log::warn!("entrance animation: element {} not animatable, showing it at rest", index);
                    if let Some(element) = node.cast::<Element>() {
                        reveal(&element);
                    }
                },
            }
        }

        let playback = Rc::new(RefCell::new(Playback::new(AnimationContext::new(timeline, targets))));
        let ticker = {
            let playback = playback.clone();
            Interval::new(FRAME_MS, move || {
                let released = playback.borrow_mut().frame(now_ms());
                if released.is_some() {
                    log::debug!("entrance animation finished");
                }
                drop(released);
            })
        };
        drop(playback.borrow_mut().attach(ticker));

        move || {
            // The interval's closure holds a clone of `playback`; releasing
            // the ticker breaks that cycle so the context drops and reverts.
            if playback.borrow().is_ticking() {
                log::debug!("entrance animation cut short by unmount");
            }
            let ticker = playback.borrow_mut().stop();
            drop(ticker);
            drop(playback);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanimated_elements_lose_the_entrance_class() {
        assert_eq!(without_class("entrance hero__copy hero__copy--last", ENTRANCE_CLASS), "hero__copy hero__copy--last");
        assert_eq!(without_class("glass-card  entrance", ENTRANCE_CLASS), "glass-card");
        assert_eq!(without_class("entrance", ENTRANCE_CLASS), "");
    }

    #[test]
    fn similar_class_names_are_kept() {
        assert_eq!(without_class("entrance-delay plan-card", ENTRANCE_CLASS), "entrance-delay plan-card");
        assert_eq!(without_class("", ENTRANCE_CLASS), "");
    }
}
