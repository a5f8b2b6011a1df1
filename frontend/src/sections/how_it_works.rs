use yew::prelude::*;

use crate::animations::{rise, slide, stagger, Ease, Pose, Reveal, Transition};
use crate::content::{how_it_works, images};
use crate::hooks::in_view::{use_in_view, SECTION_MARGIN};
use crate::sections::heading::SectionHeading;

/// The line joining the three steps grows horizontally from its left end.
pub fn connector_style(shown: bool) -> String {
    format!(
        "transform-origin: left; scale: {} 1; transition: scale 1.5s ease-out 0.5s;",
        if shown { 1 } else { 0 }
    )
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section = use_node_ref();
    let shown = use_in_view(section.clone(), SECTION_MARGIN);

    let steps = stagger(0.2, 0.3);
    let step_in = Reveal::new(Pose::offset(0.0, 50.0), Transition::new(0.5, 0.0, Ease::Spring));

    html! {
        <section ref={section} id="how-it-works" class="section bg-white">
            <div class="container">
                <SectionHeading title="How" highlight="It Works" intro={how_it_works::INTRO} {shown} />

                <div class="steps">
                    <div class="steps-connector" style={connector_style(shown)}></div>
                    { for how_it_works::STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="step card-3d" style={steps.apply(step_in, i).style(shown)}>
                            <div class="step-icon"><i class={step.icon}></i></div>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                            <ul class="step-list">
                                { for step.items.iter().enumerate().map(|(j, item)| html! {
                                    <li style={slide(-10.0, 0.4, 0.5 + 0.1 * j as f64).style(shown)}>
                                        <i class="fas fa-check text-primary"></i>
                                        <span>{ *item }</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="platform-preview" style={rise(50.0, 0.8, 0.8).style(shown)}>
                    <div class="preview-text">
                        <h3>{"Intuitive "}<span class="text-primary">{"Platform"}</span></h3>
                        <p>{ how_it_works::DASHBOARD_INTRO }</p>
                        <ul class="feature-list">
                            { for how_it_works::DASHBOARD_FEATURES.iter().enumerate().map(|(i, feature)| html! {
                                <li class="hover-nudge" style={slide(20.0, 0.5, 0.1 * i as f64).style(shown)}>
                                    <div class="feature-icon"><i class={classes!("fas", feature.icon)}></i></div>
                                    <div>
                                        <h4>{ feature.title }</h4>
                                        <p>{ feature.description }</p>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="preview-media">
                        <img class="hover-grow float" src={images::PLATFORM_DASHBOARD} alt="BIOBRIM Platform Dashboard" />
                    </div>
                </div>
            </div>
        </section>
    }
}
