use yew::prelude::*;

use crate::animations::{rise, underline_style};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    pub highlight: AttrValue,
    pub intro: AttrValue,
    pub shown: bool,
    #[prop_or_default]
    pub light: bool,
}

/// Title with a highlighted word, the growing accent bar and an intro line.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let class = if props.light { "section-heading light" } else { "section-heading" };

    html! {
        <div class={class}>
            <h2 style={rise(30.0, 0.6, 0.0).style(props.shown)}>
                { &props.title }{" "}<span class="text-primary">{ &props.highlight }</span>
            </h2>
            <div class="accent-bar" style={underline_style(props.shown)}></div>
            <p style={rise(30.0, 0.6, 0.3).style(props.shown)}>{ &props.intro }</p>
        </div>
    }
}
