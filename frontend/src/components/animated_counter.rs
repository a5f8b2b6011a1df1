use yew::prelude::*;

use crate::animations::rise;
use crate::hooks::counter::{use_counter, CounterAnimation};
use crate::hooks::in_view::{use_in_view, SECTION_MARGIN};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: i64,
    /// Seconds.
    #[prop_or(2.0)]
    pub duration: f64,
    /// Seconds before counting starts once visible.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(classes!("counter-value"))]
    pub class: Classes,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SECTION_MARGIN);

    let animation = CounterAnimation::new(props.target as f64, props.duration);
    let delay_ms = (props.delay.max(0.0) * 1000.0) as u32;
    let value = use_counter(animation, delay_ms, visible);

    html! {
        <div ref={node} class={props.class.clone()} style={rise(20.0, 0.5, props.delay).style(visible)}>
            { value.round() as i64 }
        </div>
    }
}
