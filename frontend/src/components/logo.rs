use yew::prelude::*;

use crate::animations::{Ease, Pose, Reveal, Transition};
use crate::content::images;
use crate::hooks::mounted::use_mounted;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LogoSize {
    pub fn pixels(self) -> u32 {
        match self {
            LogoSize::Sm => 40,
            LogoSize::Md => 56,
            LogoSize::Lg => 64,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub size: LogoSize,
    #[prop_or(true)]
    pub show_text: bool,
    #[prop_or_default]
    pub light: bool,
}

const BADGE: Reveal = Reveal::new(
    Pose::HIDDEN.with_scale(0.8).with_rotate(-10.0),
    Transition::new(0.5, 0.0, Ease::Spring),
);
const WORDMARK: Reveal = Reveal::new(
    Pose::offset(-20.0, 0.0),
    Transition::new(0.5, 0.2, Ease::EaseOut),
);

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let mounted = use_mounted();
    let px = props.size.pixels().to_string();
    let text_class = if props.light { "logo-text light" } else { "logo-text" };

    html! {
        <div class="logo">
            <div class="logo-badge" style={BADGE.style(mounted)}>
                <img src={images::LOGO} alt="BIOBRIM Logo" width={px.clone()} height={px} />
            </div>
            if props.show_text {
                <span class={text_class} style={WORDMARK.style(mounted)}>
                    {"BIO"}<span class="text-primary">{"BRIM"}</span>
                </span>
            }
        </div>
    }
}
