#![deny(deprecated)]

use web_sys::{ScrollBehavior, ScrollToOptions};

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn smooth_top() -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

pub fn smooth_scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_scroll_to_options(&smooth_top());
    }
}
