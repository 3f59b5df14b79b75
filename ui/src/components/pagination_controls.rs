use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Previous/next buttons driven by the last page metadata the backend sent.
#[function_component]
pub fn PaginationControls() -> Html {
    let (state, dispatch) = use_store::<State>();

    let Some(pagination) = state.pagination else {
        return html! {};
    };

    // Nothing to page through
    if pagination.total_pages <= 1 && !pagination.has_previous() {
        return html! {};
    }

    let page = pagination.page;

    let on_previous = dispatch.reduce_mut_callback(State::previous_page);
    let on_next = dispatch.reduce_mut_callback(State::next_page);

    let prev_disabled = !pagination.has_previous() || state.is_loading;
    let next_disabled = !pagination.has_next() || state.is_loading;

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-gray-700 rounded-md text-sm font-medium \
             text-gray-500 bg-gray-800 cursor-not-allowed"
        } else {
            "px-4 py-2 border border-gray-600 rounded-md text-sm font-medium \
             text-gray-200 bg-gray-700 hover:bg-gray-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-gray-800">
            <button
                onclick={on_previous}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Previous"}
            </button>

            <span class="text-sm text-gray-400">
                {format!(
                    "Page {} of {} ({} results)",
                    page,
                    pagination.total_pages.max(page),
                    pagination.total_items
                )}
            </span>

            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
