use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::logo::{Logo, LogoSize};

pub const TICK_MS: u32 = 100;
pub const STEP: u32 = 5;
/// Pause at 100% before fading out.
pub const HOLD_MS: u32 = 500;
pub const FADE_MS: u32 = 500;

pub fn next_progress(progress: u32) -> u32 {
    (progress + STEP).min(100)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Fading,
    Gone,
}

/// The phase to move to, and after how many milliseconds.
pub fn next_phase(complete: bool, current: Phase) -> Option<(u32, Phase)> {
    match (complete, current) {
        (true, Phase::Loading) => Some((HOLD_MS, Phase::Fading)),
        (_, Phase::Fading) => Some((FADE_MS, Phase::Gone)),
        _ => None,
    }
}

/// Full-screen overlay shown while the page warms up.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let progress = use_state_eq(|| 0u32);
    let phase = use_state_eq(|| Phase::Loading);
    let complete = *progress >= 100;

    {
        let progress = progress.clone();
        use_interval(
            move || progress.set(next_progress(*progress)),
            if complete { 0 } else { TICK_MS },
        );
    }

    {
        let current = *phase;
        let phase = phase.clone();
        use_effect_with_deps(
            move |&(complete, current): &(bool, Phase)| {
                let timeout = next_phase(complete, current)
                    .map(|(ms, next)| Timeout::new(ms, move || phase.set(next)));
                move || drop(timeout)
            },
            (complete, current),
        );
    }

    if *phase == Phase::Gone {
        return html! {};
    }

    let opacity = if *phase == Phase::Fading { 0 } else { 1 };

    html! {
        <div class="loading-screen" style={format!("opacity: {}; transition: opacity {}s;", opacity, FADE_MS as f64 / 1000.0)}>
            <div class="loading-logo">
                <Logo size={LogoSize::Lg} />
            </div>
            <div class="loading-track">
                <div class="loading-bar" style={format!("width: {}%;", *progress)}></div>
            </div>
            <p class="loading-caption">{"Loading amazing experiences..."}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_five_and_saturates() {
        assert_eq!(next_progress(0), 5);
        assert_eq!(next_progress(95), 100);
        assert_eq!(next_progress(100), 100);
        assert_eq!(next_progress(98), 100);
    }

    #[test]
    fn reaches_full_after_twenty_ticks() {
        let ticks = std::iter::successors(Some(0), |&p| (p < 100).then(|| next_progress(p)))
            .count()
            - 1;
        assert_eq!(ticks, 20);
    }

    #[test]
    fn holds_then_fades_then_unmounts() {
        assert_eq!(next_phase(false, Phase::Loading), None);
        assert_eq!(next_phase(true, Phase::Loading), Some((HOLD_MS, Phase::Fading)));
        assert_eq!(next_phase(true, Phase::Fading), Some((FADE_MS, Phase::Gone)));
        assert_eq!(next_phase(true, Phase::Gone), None);
    }
}
