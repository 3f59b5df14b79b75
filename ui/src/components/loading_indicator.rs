use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Spinner shown while the active view has a request in flight.
#[function_component]
pub fn LoadingIndicator() -> Html {
    let is_loading = use_selector(|state: &State| state.is_loading);

    if !*is_loading {
        return html! {};
    }

    html! {
        <div class="flex justify-center py-6" role="status">
            <div class="h-8 w-8 animate-spin rounded-full border-4 \
                        border-gray-700 border-t-purple-500" />
            <span class="sr-only">{"Loading..."}</span>
        </div>
    }
}
