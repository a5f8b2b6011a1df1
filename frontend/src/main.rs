use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod animations;
mod config;
mod content;
mod dom;
mod models;
mod hooks {
    pub mod counter;
    pub mod frame_loop;
    pub mod in_view;
    pub mod mounted;
}
mod components {
    pub mod animated_counter;
    pub mod custom_cursor;
    pub mod logo;
    pub mod particle_field;
    pub mod toast;
}
mod sections {
    pub mod about;
    pub mod benefits;
    pub mod contact;
    pub mod cta;
    pub mod footer;
    pub mod header;
    pub mod heading;
    pub mod hero;
    pub mod how_it_works;
    pub mod loading_screen;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // only fails if a logger is already installed
    let _ = console_log::init_with_level(Level::Info);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
