use yew::prelude::*;

use crate::animations::{rise, slide, stagger};
use crate::content::{about, images};
use crate::hooks::in_view::{use_in_view, SECTION_MARGIN};
use crate::sections::heading::SectionHeading;

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let shown = use_in_view(section.clone(), SECTION_MARGIN);

    let cards = stagger(0.3, 0.0);
    let mission = stagger(0.2, 0.5);

    html! {
        <section ref={section} id="about" class="section bg-cream">
            <div class="container">
                <SectionHeading title="About" highlight="BIOBRIM" intro={about::INTRO} {shown} />

                <div class="card-grid three">
                    { for about::CARDS.iter().enumerate().map(|(i, card)| html! {
                        <div class="card card-3d hover-lift" style={cards.apply(rise(50.0, 0.5, 0.0), i).style(shown)}>
                            <div class="icon-badge"><i class={card.icon}></i></div>
                            <h3>{ card.title }</h3>
                            <p>{ card.description }</p>
                        </div>
                    }) }
                </div>

                <div class="split">
                    <div class="split-text">
                        <h3 style={mission.apply(slide(-30.0, 0.5, 0.0), 0).style(shown)}>{"Our Mission"}</h3>
                        <p class="lead" style={mission.apply(slide(-30.0, 0.5, 0.0), 1).style(shown)}>
                            { about::MISSION }
                        </p>
                        <ul class="check-list">
                            { for about::MISSION_POINTS.iter().enumerate().map(|(i, point)| html! {
                                <li style={mission.apply(slide(-30.0, 0.5, 0.0), i + 2).style(shown)}>
                                    <i class="fas fa-check-circle text-primary"></i>
                                    <span>{ *point }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="split-media" style={slide(100.0, 0.8, 0.5).style(shown)}>
                        <div class="framed-image">
                            <img class="hover-grow" src={images::ABOUT_MISSION} alt="Sustainable Farming" />
                            <div class="image-shadow drift"></div>
                        </div>
                    </div>
                </div>
            </div>
            <div class="bg-circle primary top-right pulse"></div>
            <div class="bg-circle brown bottom-left pulse delayed"></div>
        </section>
    }
}
