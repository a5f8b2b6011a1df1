use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Flips to `true` shortly after the first render, so elements rendered in
/// their hidden pose have been painted once before they transition in.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state_eq(|| false);

    {
        let setter = mounted.setter();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(20, move || setter.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *mounted
}
