use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animations::{slide, Ease, Pose, Reveal, Transition};
use crate::components::particle_field::ParticleField;
use crate::content::{hero, images};
use crate::dom::{scroll_link, scroll_to_section};
use crate::hooks::mounted::use_mounted;

/// How far the hero images sink by the time the hero has scrolled away.
pub const PARALLAX_TRAVEL: f64 = 300.0;
/// Scroll progress at which the hero content is fully faded.
pub const FADE_END: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub offset_y: f64,
    pub opacity: f64,
}

/// Progress of the hero scrolling out of view: 0 with its top at the top of
/// the viewport, 1 once its bottom has passed the top.
pub fn scroll_progress(scroll_y: f64, top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    ((scroll_y - top) / height).clamp(0.0, 1.0)
}

pub fn parallax(progress: f64) -> Parallax {
    let progress = progress.clamp(0.0, 1.0);
    Parallax {
        offset_y: PARALLAX_TRAVEL * progress,
        opacity: (1.0 - progress / FADE_END).clamp(0.0, 1.0),
    }
}

const IMAGE_IN: Transition = Transition::new(1.0, 0.0, Ease::EaseOut);

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let mounted = use_mounted();
    let (_, scroll_y) = use_window_scroll();

    let (top, height) = section
        .cast::<HtmlElement>()
        .map(|el| (el.offset_top() as f64, el.offset_height() as f64))
        .unwrap_or((0.0, 0.0));
    let Parallax { offset_y, opacity } = parallax(scroll_progress(scroll_y, top, height));

    let pellets = Reveal::new(Pose::offset(0.0, 50.0).with_rotate(-5.0), IMAGE_IN.delayed(0.4));
    let farming = Reveal::new(Pose::offset(0.0, 50.0).with_rotate(5.0), IMAGE_IN.delayed(0.7));

    html! {
        <section ref={section} id="hero" class="hero">
            <ParticleField count={40} />
            <div class="hero-gradient"></div>

            <div class="container hero-row">
                <div class="hero-content" style={format!("opacity: {};", opacity)}>
                    <h1 style={slide(-50.0, 0.8, 0.3).style(mounted)}>
                        {"Connecting "}<span class="text-primary">{"Biomass"}</span>{" Producers with Industry"}
                    </h1>
                    <p class="lead" style={slide(-50.0, 0.8, 0.6).style(mounted)}>{ hero::LEAD }</p>
                    <div class="hero-actions" style={slide(-50.0, 0.8, 0.9).style(mounted)}>
                        <a href="#about" class="btn btn-primary btn-pill btn-lg" onclick={scroll_link("#about")}>
                            {"Learn More"}
                        </a>
                        <a href="#registration" class="btn btn-brown btn-pill btn-lg" onclick={scroll_link("#registration")}>
                            {"Join Now"}
                        </a>
                    </div>
                </div>

                <div class="hero-images" style={format!("translate: 0 {}px; opacity: {};", offset_y, opacity)}>
                    <img
                        class="hero-image top-left hover-tilt-right"
                        src={images::HERO_PELLETS}
                        alt="Biomass Pellets"
                        style={pellets.style(mounted)}
                    />
                    <img
                        class="hero-image bottom-right hover-tilt-left"
                        src={images::HERO_FARMING}
                        alt="Sustainable Farming"
                        style={farming.style(mounted)}
                    />
                    <div class="blob blob-primary"></div>
                    <div class="blob blob-brown"></div>
                </div>
            </div>

            <div class="scroll-indicator" onclick={Callback::from(|_: MouseEvent| scroll_to_section("#about"))}>
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_follows_the_section() {
        assert_eq!(scroll_progress(0.0, 0.0, 900.0), 0.0);
        assert_eq!(scroll_progress(450.0, 0.0, 900.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 0.0, 900.0), 1.0);
        assert_eq!(scroll_progress(100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn images_sink_and_content_fades_by_eighty_percent() {
        assert_eq!(parallax(0.0), Parallax { offset_y: 0.0, opacity: 1.0 });
        let half = parallax(0.4);
        assert!((half.offset_y - 120.0).abs() < 1e-9);
        assert!((half.opacity - 0.5).abs() < 1e-9);
        assert_eq!(parallax(0.8).opacity, 0.0);
        assert_eq!(parallax(1.0).offset_y, PARALLAX_TRAVEL);
    }
}
