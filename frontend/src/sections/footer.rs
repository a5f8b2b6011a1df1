use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::content::{footer, BRAND, SOCIAL_LINKS};

pub fn copyright(year: u32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Logo light=true />
                        <p>{ footer::BLURB }</p>
                        <div class="social-row">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a href={link.href} class="social-link dark hover-pop"><i class={classes!("fab", link.icon)}></i></a>
                            }) }
                        </div>
                    </div>
                    { for footer::COLUMNS.iter().map(|column| html! {
                        <div class="footer-column">
                            <h4>{ column.title }</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li><a href={link.href} class="hover-nudge">{ link.text }</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{ copyright(year) }</p>
                    <div class="legal-links">
                        { for footer::LEGAL.iter().map(|label| html! { <a href="#">{ *label }</a> }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(copyright(2025), "© 2025 BIOBRIM. All rights reserved.");
    }
}
