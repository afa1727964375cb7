use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod forms;
mod hooks;
mod scroll;
mod styles;
mod components {
    pub mod about;
    pub mod behind_the_scenes;
    pub mod category_search;
    pub mod comparison_table;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod high_ticket_saas;
    pub mod navbar;
    pub mod portfolio;
    pub mod pricing;
    pub mod process_timeline;
    pub mod reveal;
    pub mod services;
    pub mod special_offer;
    pub mod stats;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod local_brands;
    pub mod not_found;
    pub mod online_brands;
    pub mod website;
}

use pages::{
    home::Home,
    local_brands::LocalBrands,
    not_found::NotFound,
    online_brands::OnlineBrands,
    website::Website,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/local-brands")]
    LocalBrands,
    #[at("/online-brands")]
    OnlineBrands,
    #[at("/website")]
    Website,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::LocalBrands => {
            info!("Rendering Local Brands page");
            html! { <LocalBrands /> }
        },
        Route::OnlineBrands => {
            info!("Rendering Online Brands page");
            html! { <OnlineBrands /> }
        },
        Route::Website => {
            info!("Rendering Website page");
            html! { <Website /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::BASE_CSS}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
