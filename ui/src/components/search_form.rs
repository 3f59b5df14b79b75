use payloads::QueryFormData;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// User and channel search inputs. Submitting writes the query to the store.
#[function_component]
pub fn SearchForm() -> Html {
    let (state, dispatch) = use_store::<State>();
    let user_ref = use_node_ref();
    let channel_ref = use_node_ref();

    let on_submit = {
        let user_ref = user_ref.clone();
        let channel_ref = channel_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let query = QueryFormData::new(
                input_value(&user_ref),
                Some(input_value(&channel_ref)),
            );
            tracing::debug!("search submitted: {query:?}");
            dispatch.reduce_mut(|state| state.submit_query(query));
        })
    };

    let input_class = "w-full rounded-md border border-gray-700 bg-gray-900 \
                       px-3 py-2 text-sm text-gray-100 \
                       focus:border-purple-500 focus:outline-none";

    html! {
        <form onsubmit={on_submit} class="grid gap-4 md:grid-cols-[1fr_1fr_auto] items-end">
            <label class="block space-y-1">
                <span class="text-sm text-gray-400">{"User (login or id)"}</span>
                <input
                    ref={user_ref}
                    type="text"
                    class={input_class}
                    value={state.query.user_search_query.clone()}
                />
            </label>
            <label class="block space-y-1">
                <span class="text-sm text-gray-400">{"Channel (login or id)"}</span>
                <input
                    ref={channel_ref}
                    type="text"
                    class={input_class}
                    value={state.query.channel_search_query.clone().unwrap_or_default()}
                />
            </label>
            <button
                type="submit"
                class="px-4 py-2 rounded-md bg-purple-600 hover:bg-purple-500 \
                       text-sm font-medium text-white"
            >
                {"Search"}
            </button>
        </form>
    }
}
