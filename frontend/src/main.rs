use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod leads;
mod landing_state;
mod api {
    pub mod submit;
}
mod components {
    pub mod nav;
    pub mod option_selector;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod landing;
    pub mod lead_forms;
}

use pages::landing::LandingPage;

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
            info!("Rendering Landing page");
            html! { <LandingPage /> }
        },
        Route::NotFound => {
            // About, Contact and the forms are views of the one page, not routes.
            info!("Unknown path, redirecting to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting RepLinker");
    yew::Renderer::<App>::new().render();
}
