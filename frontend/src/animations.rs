//! Entrance animation parameters.
//!
//! Every animated element has a hidden pose and rests at [`Pose::VISIBLE`].
//! Styles use the individual `translate`/`scale`/`rotate` properties so the
//! hover rules in the stylesheet, which use `transform`, compose with them.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    EaseOut,
    Spring,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::EaseOut => "ease-out",
            Ease::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::VISIBLE
    };

    pub const fn offset(x: f64, y: f64) -> Pose {
        Pose {
            x,
            y,
            ..Pose::HIDDEN
        }
    }

    pub const fn with_scale(self, scale: f64) -> Pose {
        Pose { scale, ..self }
    }

    pub const fn with_rotate(self, rotate: f64) -> Pose {
        Pose { rotate, ..self }
    }

    pub const fn with_opacity(self, opacity: f64) -> Pose {
        Pose { opacity, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; translate: {}px {}px; scale: {}; rotate: {}deg;",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: f64, delay: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay,
            ease,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// `transition` value for the given CSS properties.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|property| {
                format!(
                    "{} {}s {} {}s",
                    property,
                    self.duration,
                    self.ease.css(),
                    self.delay
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An element that moves from `hidden` to the visible pose once its
/// section is in view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub hidden: Pose,
    pub transition: Transition,
}

const POSE_PROPERTIES: &[&str] = &["opacity", "translate", "scale", "rotate"];

impl Reveal {
    pub const fn new(hidden: Pose, transition: Transition) -> Self {
        Self { hidden, transition }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self {
            transition: self.transition.delayed(delay),
            ..self
        }
    }

    pub fn style(&self, shown: bool) -> String {
        let pose = if shown { Pose::VISIBLE } else { self.hidden };
        format!(
            "{} transition: {};",
            pose.css(),
            self.transition.css(POSE_PROPERTIES)
        )
    }
}

pub const FADE_DISTANCE: f64 = 40.0;

/// Slide in from `direction` while fading in. 0.6s ease-out.
pub fn fade_in(direction: Direction, delay: f64) -> Reveal {
    let hidden = match direction {
        Direction::Up => Pose::offset(0.0, FADE_DISTANCE),
        Direction::Down => Pose::offset(0.0, -FADE_DISTANCE),
        Direction::Left => Pose::offset(FADE_DISTANCE, 0.0),
        Direction::Right => Pose::offset(-FADE_DISTANCE, 0.0),
    };
    Reveal::new(hidden, Transition::new(0.6, delay, Ease::EaseOut))
}

pub fn scale_in(delay: f64) -> Reveal {
    Reveal::new(
        Pose::HIDDEN.with_scale(0.8),
        Transition::new(0.6, delay, Ease::EaseOut),
    )
}

/// Small vertical slide, the default for section headings.
pub fn rise(distance: f64, duration: f64, delay: f64) -> Reveal {
    Reveal::new(
        Pose::offset(0.0, distance),
        Transition::new(duration, delay, Ease::EaseOut),
    )
}

pub fn slide(x: f64, duration: f64, delay: f64) -> Reveal {
    Reveal::new(
        Pose::offset(x, 0.0),
        Transition::new(duration, delay, Ease::EaseOut),
    )
}

/// Children of a container appear one after another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub step: f64,
    pub delay_children: f64,
}

pub const fn stagger(step: f64, delay_children: f64) -> Stagger {
    Stagger {
        step,
        delay_children,
    }
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.step * index as f64
    }

    pub fn apply(&self, base: Reveal, index: usize) -> Reveal {
        base.delayed(self.delay_for(index))
    }
}

/// Inline style for the accent bar under section headings.
pub fn underline_style(shown: bool) -> String {
    format!(
        "width: {}px; transition: {};",
        if shown { 80 } else { 0 },
        Transition::new(0.8, 0.2, Ease::EaseOut).css(&["width"])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_starts_forty_pixels_away() {
        assert_eq!(fade_in(Direction::Up, 0.0).hidden, Pose::offset(0.0, 40.0));
        assert_eq!(fade_in(Direction::Down, 0.0).hidden, Pose::offset(0.0, -40.0));
        assert_eq!(fade_in(Direction::Left, 0.0).hidden, Pose::offset(40.0, 0.0));
        assert_eq!(fade_in(Direction::Right, 0.0).hidden, Pose::offset(-40.0, 0.0));
        assert_eq!(fade_in(Direction::Up, 0.3).transition.delay, 0.3);
        assert_eq!(fade_in(Direction::Up, 0.0).transition.duration, 0.6);
    }

    #[test]
    fn hidden_and_visible_styles() {
        let reveal = scale_in(0.2);
        let hidden = reveal.style(false);
        assert!(hidden.starts_with("opacity: 0; translate: 0px 0px; scale: 0.8;"));
        let shown = reveal.style(true);
        assert!(shown.starts_with("opacity: 1; translate: 0px 0px; scale: 1; rotate: 0deg;"));
        assert!(shown.contains("opacity 0.6s ease-out 0.2s"));
        assert!(shown.contains("rotate 0.6s ease-out 0.2s"));
    }

    #[test]
    fn stagger_offsets_each_child() {
        let s = stagger(0.3, 0.3);
        assert_eq!(s.delay_for(0), 0.3);
        assert!((s.delay_for(2) - 0.9).abs() < 1e-9);
        let child = s.apply(rise(50.0, 0.5, 0.0), 1);
        assert!((child.transition.delay - 0.6).abs() < 1e-9);
    }

    #[test]
    fn spring_overshoots_before_settling() {
        assert_eq!(Ease::EaseOut.css(), "ease-out");
        let spring = Transition::new(0.5, 0.0, Ease::Spring).css(&["scale"]);
        assert_eq!(spring, "scale 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) 0s");
    }

    #[test]
    fn underline_grows_to_eighty_pixels() {
        assert!(underline_style(false).starts_with("width: 0px;"));
        assert!(underline_style(true).starts_with("width: 80px;"));
    }
}
