use payloads::{APIClient, UrlBuilder};
use yew::prelude::*;
use yewdux::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod state;
pub mod utils;

pub use state::{ResultView, State};

use components::{
    DonationsResults, LoadingIndicator, PaginationControls, RaidsResults,
    SearchForm, StreamsResults, ViewTabs,
};

/// Backend origin - configurable via environment or same-origin fallback
pub fn backend_origin() -> String {
    // Try environment variable first (set at build time)
    option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        })
}

pub fn get_api_client() -> APIClient {
    APIClient::new(backend_origin())
}

pub fn get_url_builder() -> UrlBuilder {
    UrlBuilder::new(backend_origin())
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <div class="min-h-screen bg-gray-950 text-gray-100">
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                <SearchForm />
                <ViewTabs />
                <LoadingIndicator />
                <Results />
                <PaginationControls />
            </main>
        </div>
    }
}

#[function_component]
fn Results() -> Html {
    let active_view = use_selector(|state: &State| state.active_view);

    match *active_view {
        ResultView::Donations => html! { <DonationsResults /> },
        ResultView::Raids => html! { <RaidsResults /> },
        ResultView::Streams => html! { <StreamsResults /> },
    }
}
