use yew::prelude::*;
use yewdux::prelude::*;

use crate::{ResultView, State};

#[function_component]
pub fn ViewTabs() -> Html {
    let (state, dispatch) = use_store::<State>();

    html! {
        <nav class="flex gap-2 border-b border-gray-800">
            { for ResultView::ALL.iter().map(|&view| {
                let is_active = state.active_view == view;
                let onclick = dispatch.reduce_mut_callback(move |state| state.select_view(view));
                let class = if is_active {
                    "px-4 py-2 text-sm font-medium border-b-2 border-purple-500 text-gray-100"
                } else {
                    "px-4 py-2 text-sm font-medium text-gray-400 hover:text-gray-200"
                };

                html! {
                    <button type="button" {onclick} {class}>{view.label()}</button>
                }
            }) }
        </nav>
    }
}
