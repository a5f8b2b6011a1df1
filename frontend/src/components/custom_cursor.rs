use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Elements that make the cursor dot grow while hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .card-3d, input, textarea, select";

/// At or below this window width the follower is not rendered.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

const DIAMETER: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub pressed: bool,
    pub hovering: bool,
}

pub enum CursorAction {
    Move(f64, f64),
    Press,
    Release,
    Hover(bool),
}

impl CursorState {
    pub fn expanded(&self) -> bool {
        self.pressed || self.hovering
    }

    pub fn style(&self) -> String {
        let (scale, fill) = if self.expanded() {
            (2.5, "rgba(139, 195, 74, 0.2)")
        } else {
            (1.0, "rgba(139, 195, 74, 0.5)")
        };
        format!(
            "width: {d}px; height: {d}px; translate: {x}px {y}px; scale: {scale}; background-color: {fill}; opacity: {opacity};",
            d = DIAMETER,
            x = self.x - DIAMETER / 2.0,
            y = self.y - DIAMETER / 2.0,
            opacity = if self.visible { 1 } else { 0 },
        )
    }
}

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CursorAction::Move(x, y) => {
                next.x = x;
                next.y = y;
                next.visible = true;
            }
            CursorAction::Press => next.pressed = true,
            CursorAction::Release => next.pressed = false,
            CursorAction::Hover(hovering) => next.hovering = hovering,
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn is_interactive(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Pointer follower dot. Hidden until the pointer first moves.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor = use_reducer(CursorState::default);
    let (width, _) = use_window_size();

    {
        let cursor = cursor.dispatcher();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            cursor.dispatch(CursorAction::Move(e.client_x() as f64, e.client_y() as f64));
        });
    }
    {
        let cursor = cursor.dispatcher();
        use_event_with_window("mousedown", move |_: MouseEvent| cursor.dispatch(CursorAction::Press));
    }
    {
        let cursor = cursor.dispatcher();
        use_event_with_window("mouseup", move |_: MouseEvent| cursor.dispatch(CursorAction::Release));
    }
    {
        let cursor = cursor.dispatcher();
        use_event_with_window("mouseover", move |e: MouseEvent| {
            if is_interactive(&e) {
                cursor.dispatch(CursorAction::Hover(true));
            }
        });
    }
    {
        let cursor = cursor.dispatcher();
        use_event_with_window("mouseout", move |e: MouseEvent| {
            if is_interactive(&e) {
                cursor.dispatch(CursorAction::Hover(false));
            }
        });
    }

    if width <= MOBILE_MAX_WIDTH {
        return html! {};
    }

    html! {
        <div class="custom-cursor" style={cursor.style()} />
    }
}
