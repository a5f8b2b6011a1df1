use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Smooth-scrolls to the element matching `selector` (e.g. `#about`).
pub fn scroll_to_section(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => log::warn!("no element matches {}", selector),
        Err(e) => log::warn!("bad selector {}: {:?}", selector, e),
    }
}

/// Click handler for in-page anchors: cancels navigation and scrolls instead.
pub fn scroll_link(selector: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(selector);
    })
}
