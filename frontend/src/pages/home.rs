use yew::prelude::*;

use crate::components::custom_cursor::CustomCursor;
use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use crate::sections::{
    about::About, benefits::Benefits, contact::Contact, cta::CallToAction, footer::Footer,
    header::Header, hero::Hero, how_it_works::HowItWorks, loading_screen::LoadingScreen,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(PAGE_TITLE);
                if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
                    let _ = meta.set_attribute("content", PAGE_DESCRIPTION);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <LoadingScreen />
            <CustomCursor />
            <Header />
            <main>
                <Hero />
                <About />
                <HowItWorks />
                <Benefits />
                <CallToAction />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
