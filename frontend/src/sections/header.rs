use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animations::{fade_in, scale_in, Direction};
use crate::components::logo::Logo;
use crate::content::NAV_LINKS;
use crate::dom::scroll_to_section;
use crate::hooks::mounted::use_mounted;

/// Scroll distance over which the header settles into its compact look.
pub const SETTLE_DISTANCE: f64 = 50.0;
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Inline style of the header bar after scrolling `scroll_y` pixels.
pub fn header_style(scroll_y: f64) -> String {
    let t = (scroll_y / SETTLE_DISTANCE).clamp(0.0, 1.0);
    format!(
        "background: rgba(255, 255, 255, {:.3}); padding: {:.3}rem 0; box-shadow: 0 {:.1}px {:.1}px rgba(0, 0, 0, {:.3});",
        lerp(0.95, 0.98, t),
        lerp(1.0, 0.75, t),
        lerp(2.0, 4.0, t),
        lerp(10.0, 20.0, t),
        lerp(0.1, 0.15, t),
    )
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state_eq(|| false);
    let mounted = use_mounted();
    let (_, scroll_y) = use_window_scroll();
    let (width, _) = use_window_size();

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |width| {
                if *width >= DESKTOP_MIN_WIDTH {
                    menu_open.set(false);
                }
                || ()
            },
            width,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let link_click = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(href);
        })
    };

    let mobile_class = if *menu_open { "mobile-menu open" } else { "mobile-menu" };
    let toggle_icon = if *menu_open { "fas fa-times" } else { "fas fa-bars" };

    html! {
        <header class="site-header" style={header_style(scroll_y)}>
            <div class="container header-row">
                <Logo />

                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                        <a
                            href={link.href}
                            class="nav-link"
                            style={fade_in(Direction::Down, 0.1 * i as f64).style(mounted)}
                            onclick={link_click(link.href)}
                        >
                            { link.text }
                        </a>
                    }) }
                    <div class="nav-cta" style={scale_in(0.6).style(mounted)}>
                        <button class="btn btn-primary btn-pill">{"Sign In"}</button>
                    </div>
                </nav>

                <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    <i class={toggle_icon}></i>
                </button>
            </div>

            <div class={mobile_class}>
                <nav>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} onclick={link_click(link.href)}>{ link.text }</a>
                    }) }
                    <button class="btn btn-primary btn-pill">{"Sign In"}</button>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_over_first_fifty_pixels() {
        assert_eq!(
            header_style(0.0),
            "background: rgba(255, 255, 255, 0.950); padding: 1.000rem 0; box-shadow: 0 2.0px 10.0px rgba(0, 0, 0, 0.100);"
        );
        let halfway = header_style(25.0);
        assert!(halfway.contains("padding: 0.875rem 0;"));
        assert!(halfway.contains("0 3.0px 15.0px"));
    }

    #[test]
    fn settles_after_fifty_pixels() {
        assert_eq!(header_style(50.0), header_style(4000.0));
        assert!(header_style(50.0).contains("rgba(255, 255, 255, 0.980)"));
        assert!(header_style(-10.0).contains("padding: 1.000rem 0;"));
    }
}
