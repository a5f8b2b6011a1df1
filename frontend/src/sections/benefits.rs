use yew::prelude::*;

use crate::animations::{fade_in, rise, scale_in, slide, Direction, Pose, Reveal, Transition, Ease};
use crate::components::animated_counter::AnimatedCounter;
use crate::content::{benefits, images};
use crate::hooks::in_view::{use_in_view, SECTION_MARGIN};
use crate::sections::heading::SectionHeading;

/// Seconds before statistic `index` starts counting.
pub fn stat_delay(index: usize) -> f64 {
    0.5 + 0.2 * index as f64
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    let section = use_node_ref();
    let shown = use_in_view(section.clone(), SECTION_MARGIN);
    let stats = use_node_ref();
    let stats_shown = use_in_view(stats.clone(), "-50px");

    let impact_image = Reveal::new(
        Pose::HIDDEN.with_opacity(1.0).with_scale(0.8).with_rotate(-5.0),
        Transition::new(0.5, 0.2, Ease::EaseOut),
    );

    html! {
        <section ref={section} id="benefits" class="section bg-cream">
            <div class="container">
                <SectionHeading title="Benefits for" highlight="All" intro={benefits::INTRO} {shown} />

                <div class="card-grid two">
                    { for benefits::CARDS.iter().enumerate().map(|(i, card)| {
                        let first_item = 0.4 + 0.2 * i as f64;
                        html! {
                            <div class="card benefit-card card-3d" style={fade_in(Direction::Up, 0.2 * (i + 1) as f64).style(shown)}>
                                <div class="benefit-image">
                                    <img class="hover-grow" src={card.image} alt={card.alt} />
                                </div>
                                <div class="benefit-body">
                                    <h3>{ card.title }</h3>
                                    <ul class="check-list">
                                        { for card.items.iter().enumerate().map(|(j, item)| html! {
                                            <li style={slide(-20.0, 0.5, first_item + 0.1 * j as f64).style(shown)}>
                                                <i class="fas fa-check-circle text-primary"></i>
                                                <span>{ *item }</span>
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="impact" style={rise(50.0, 0.6, 0.0).style(shown)}>
                    <div class="impact-media">
                        <img src={images::BENEFITS_ENVIRONMENT} alt="Environmental Impact" style={impact_image.style(shown)} />
                    </div>
                    <div class="impact-text">
                        <h3 style={rise(20.0, 0.5, 0.0).style(shown)}>{"Environmental Impact"}</h3>
                        <p style={rise(20.0, 0.5, 0.1).style(shown)}>{ benefits::IMPACT_INTRO }</p>
                        <div class="impact-grid">
                            { for benefits::IMPACT.iter().enumerate().map(|(i, item)| html! {
                                <div class="impact-item" style={slide(20.0, 0.5, 0.2 + 0.1 * i as f64).style(shown)}>
                                    <div class="feature-icon"><i class={classes!("fas", item.icon)}></i></div>
                                    <div>
                                        <h4>{ item.title }</h4>
                                        <p>{ item.description }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div ref={stats} class="stats">
                    { for benefits::STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div class="stat card-3d hover-lift" style={scale_in(0.1 * i as f64).style(stats_shown)}>
                            <div class="stat-icon"><i class={classes!("fas", stat.icon)}></i></div>
                            <AnimatedCounter target={stat.value} delay={stat_delay(i)} />
                            <p>{ stat.label }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_start_two_tenths_apart() {
        let delays: Vec<f64> = (0..4).map(stat_delay).collect();
        for (got, want) in delays.iter().zip([0.5, 0.7, 0.9, 1.1]) {
            assert!((got - want).abs() < 1e-9);
        }
    }
}
