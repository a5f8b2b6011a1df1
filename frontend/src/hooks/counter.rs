use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::frame_loop::FrameLoop;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutQuad,
}

impl Easing {
    /// Maps progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl CounterAnimation {
    pub fn new(end: f64, duration_secs: f64) -> Self {
        Self {
            start: 0.0,
            end,
            duration_ms: duration_secs * 1000.0,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        self.start + (self.end - self.start) * self.easing.apply(self.progress(elapsed_ms))
    }

    /// What the counter shows after `elapsed_ms`.
    pub fn display_at(&self, elapsed_ms: f64) -> i64 {
        self.value_at(elapsed_ms).round() as i64
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Animates `animation` once `active` turns true, after `delay_ms`.
/// Returns the current (unrounded) value. Once finished it stays at the end
/// value; there is no restart.
#[hook]
pub fn use_counter(animation: CounterAnimation, delay_ms: u32, active: bool) -> f64 {
    let value = use_state(|| animation.start);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(animation, delay_ms, active): &(CounterAnimation, u32, bool)| {
                let running: Rc<RefCell<Option<FrameLoop>>> = Rc::default();
                let timeout = active.then(|| {
                    let running = running.clone();
                    let setter = value.setter();
                    Timeout::new(delay_ms, move || {
                        let mut started_at: Option<f64> = None;
                        *running.borrow_mut() = Some(FrameLoop::start(move |timestamp| {
                            let start = *started_at.get_or_insert(timestamp);
                            let elapsed = timestamp - start;
                            setter.set(animation.value_at(elapsed));
                            !animation.is_finished(elapsed)
                        }));
                    })
                });

                move || {
                    drop(timeout);
                    running.borrow_mut().take();
                }
            },
            (animation, delay_ms, active),
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_at_duration_and_never_exceeds_it() {
        let counter = CounterAnimation::new(500.0, 2.0);
        assert_eq!(counter.display_at(0.0), 0);
        assert_eq!(counter.display_at(1000.0), 250);
        assert_eq!(counter.display_at(2000.0), 500);
        assert_eq!(counter.display_at(2016.7), 500);
        assert_eq!(counter.display_at(10_000.0), 500);
        assert!(counter.is_finished(2000.0));
        assert!(!counter.is_finished(1999.0));
    }

    #[test]
    fn linear_counter_is_monotonic() {
        let counter = CounterAnimation::new(2500.0, 2.0);
        let mut previous = i64::MIN;
        for frame in 0..200 {
            let shown = counter.display_at(frame as f64 * 16.7);
            assert!(shown >= previous);
            assert!(shown <= 2500);
            previous = shown;
        }
        assert_eq!(previous, 2500);
    }

    #[test]
    fn eased_counters_stay_in_range() {
        for easing in [Easing::EaseOutCubic, Easing::EaseInOutQuad] {
            let counter = CounterAnimation::new(150.0, 2.0).with_easing(easing);
            for ms in (0..=2400).step_by(50) {
                let shown = counter.display_at(ms as f64);
                assert!((0..=150).contains(&shown), "{easing:?} at {ms}ms gave {shown}");
            }
            assert_eq!(counter.display_at(2000.0), 150);
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let counter = CounterAnimation::new(15.0, 0.0);
        assert_eq!(counter.display_at(0.0), 15);
    }
}
