use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod logs;
mod state;

pub mod components;
pub mod hooks;
pub mod pages;

pub use state::{State, ThemeMode};

use components::layout::MainLayout;
use pages::{HomePage, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <MainLayout>
                <HomePage />
            </MainLayout>
        },
        Route::NotFound => html! {
            <MainLayout>
                <NotFoundPage />
            </MainLayout>
        },
    }
}
