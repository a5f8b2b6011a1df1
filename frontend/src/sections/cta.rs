use yew::prelude::*;

use crate::animations::{fade_in, slide, Direction};
use crate::content::{cta, images};
use crate::dom::scroll_link;
use crate::hooks::in_view::{use_in_view, SECTION_MARGIN};
use crate::sections::heading::SectionHeading;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let section = use_node_ref();
    let shown = use_in_view(section.clone(), SECTION_MARGIN);

    html! {
        <section
            ref={section}
            id="registration"
            class="section cta"
            style={format!("background-image: url('{}');", images::CTA_BACKGROUND)}
        >
            <div class="cta-overlay"></div>
            <div class="container">
                <SectionHeading title="Join the" highlight="BIOBRIM" intro={cta::INTRO} {shown} light=true />

                <div class="card-grid two">
                    { for cta::CARDS.iter().enumerate().map(|(i, card)| {
                        let from = if i == 0 { Direction::Right } else { Direction::Left };
                        html! {
                            <div class="card register-card card-3d hover-lift" style={fade_in(from, 0.2 + 0.2 * i as f64).style(shown)}>
                                <div class="icon-badge large"><i class={card.icon}></i></div>
                                <h3>{ card.title }</h3>
                                <p>{ card.description }</p>
                                <ul class="check-list">
                                    { for card.items.iter().enumerate().map(|(j, item)| html! {
                                        <li style={slide(-20.0, 0.5, 0.5 + 0.1 * j as f64).style(shown)}>
                                            <i class="fas fa-check-circle text-primary"></i>
                                            <span>{ *item }</span>
                                        </li>
                                    }) }
                                </ul>
                                <a href={card.href} class="btn btn-primary btn-pill btn-block" onclick={scroll_link(card.href)}>
                                    { card.button }
                                </a>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
