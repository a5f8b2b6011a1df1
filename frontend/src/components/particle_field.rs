use std::ops::Range;

use web_sys::js_sys::Math;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub color: AttrValue,
    /// Pixels.
    pub size: Range<f64>,
    /// Seconds per float cycle.
    pub speed: Range<f64>,
    pub opacity: Range<f64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            color: AttrValue::Static("rgba(139, 195, 74, 0.6)"),
            size: 5.0..15.0,
            speed: 10.0..20.0,
            opacity: 0.2..0.8,
        }
    }
}

/// Start delays are spread over this many seconds.
pub const MAX_DELAY: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    /// Percent of the container.
    pub left: f64,
    pub top: f64,
    pub opacity: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self, color: &str) -> String {
        format!(
            "width: {s}px; height: {s}px; left: {l}%; top: {t}%; opacity: {o}; background-color: {color}; animation: float {d}s ease-in-out infinite; animation-delay: {delay}s;",
            s = self.size,
            l = self.left,
            t = self.top,
            o = self.opacity,
            d = self.duration,
            delay = self.delay,
        )
    }
}

fn within(range: &Range<f64>, unit: f64) -> f64 {
    range.start + unit * (range.end - range.start)
}

/// `random` yields values in `[0, 1)`.
pub fn generate_particles(
    count: usize,
    config: &ParticleConfig,
    mut random: impl FnMut() -> f64,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size: within(&config.size, random()),
            left: random() * 100.0,
            top: random() * 100.0,
            opacity: within(&config.opacity, random()),
            duration: within(&config.speed, random()),
            delay: random() * MAX_DELAY,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    #[prop_or(30)]
    pub count: usize,
    #[prop_or_default]
    pub config: ParticleConfig,
}

/// Decorative floating dots behind a section.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let particles = use_memo(
        |(count, config)| generate_particles(*count, config, Math::random),
        (props.count, props.config.clone()),
    );

    html! {
        <div class="particle-field">
            { for particles.iter().map(|p| html! {
                <div class="particle" style={p.style(&props.config.color)} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn attributes_stay_in_configured_ranges() {
        let config = ParticleConfig::default();
        let particles = generate_particles(40, &config, sequence(&[0.0, 0.13, 0.5, 0.77, 0.999]));
        assert_eq!(particles.len(), 40);
        for p in &particles {
            assert!((5.0..15.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.2..0.8).contains(&p.opacity));
            assert!((10.0..20.0).contains(&p.duration));
            assert!((0.0..MAX_DELAY).contains(&p.delay));
        }
    }

    #[test]
    fn zero_count_draws_nothing() {
        assert!(generate_particles(0, &ParticleConfig::default(), || 0.5).is_empty());
    }

    #[test]
    fn style_uses_shared_float_keyframes() {
        let p = generate_particles(1, &ParticleConfig::default(), || 0.5).remove(0);
        let style = p.style("red");
        assert!(style.contains("animation: float 15s ease-in-out infinite;"));
        assert!(style.contains("width: 10px;"));
    }
}
