use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::YewduxRoot;

pub mod components;
pub mod config;
pub mod contexts;
pub mod fetch;
pub mod hooks;
mod logs;
pub mod pages;
pub mod platform;
pub mod router;
pub mod session;
pub mod utils;

use components::layout::MainLayout;
use config::AppConfig;

pub use router::Route;

/// HTTP client for every request the app makes. In the browser this is a
/// thin wrapper over `fetch`.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    let basename = AppConfig::from_env().base_url.map(AttrValue::from);

    html! {
        <YewduxRoot>
            <BrowserRouter {basename}>
                <MainLayout>
                    <Switch<Route> render={router::switch} />
                </MainLayout>
            </BrowserRouter>
        </YewduxRoot>
    }
}
