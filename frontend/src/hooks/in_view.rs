use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Margin used by most sections: the element must be 100px inside the viewport.
pub const SECTION_MARGIN: &str = "-100px";

/// Latches the first time an element is reported as intersecting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnterOnce {
    entered: bool,
}

impl EnterOnce {
    /// Feeds one visibility signal; `true` only for the first entry.
    pub fn record(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn entered(&self) -> bool {
        self.entered
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching one element, disconnected on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportObserver {
    pub fn observe<F>(element: &Element, root_margin: &str, on_enter: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let mut latch = EnterOnce::default();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if latch.record(intersecting) {
                    on_enter();
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("IntersectionObserver unavailable: {:?}", e);
                    return None;
                }
            };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `true` from the moment `node` first scrolls into view, for the rest of
/// the component's life. Scrolling back out does not reset it.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = if *entered {
                    None
                } else {
                    match node.cast::<Element>() {
                        Some(element) => {
                            let setter = entered.setter();
                            let watched = ViewportObserver::observe(&element, root_margin, move || {
                                setter.set(true)
                            });
                            if watched.is_none() {
                                // No observer support: show the content right away.
                                entered.set(true);
                            }
                            watched
                        }
                        None => None,
                    }
                };
                move || drop(observer)
            },
            node,
        );
    }

    *entered
}
