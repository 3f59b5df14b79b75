use std::rc::Rc;

use payloads::responses::{Raid, Raids};
use payloads::{FetchUrl, Pagination, ParamNames, QueryFormData, UrlBuilder};
use yew::prelude::*;
use yew::virtual_dom::Key;
use yewdux::prelude::*;

use super::{Column, DataDisplay, ErrorPanel, Keyed, optional_text};
use crate::hooks::use_fetch;
use crate::utils::time::format_timestamp;
use crate::{State, get_url_builder};

/// Request URL for raids received by the queried channel, optionally only
/// those made by the queried user.
pub fn raids_url(
    builder: &UrlBuilder,
    query: &QueryFormData,
    pagination: Option<Pagination>,
) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let channel = query.channel();
    let data_name = channel.as_ref().map_or(ParamNames::CHANNEL.by_login, |channel| {
        channel.param_name(ParamNames::CHANNEL)
    });
    let data = channel.map(|channel| channel.url_value());
    let raider = query
        .user()
        .map(|raider| format!("&{}", raider.query_fragment(ParamNames::RAIDER)));

    let request = FetchUrl::new("/users/raids", data_name, data.as_deref())
        .with_pagination(pagination)
        .with_additional(raider.as_deref());
    Some(builder.build(&request))
}

impl Keyed for Raid {
    fn row_key(&self) -> Key {
        Key::from(self.id.to_string())
    }
}

pub fn raid_columns() -> Vec<Column<Raid>> {
    vec![
        Column::field("Id", |raid: &Raid| raid.id.to_string()),
        Column::field("Raider Name", |raid: &Raid| {
            optional_text(raid.raider.as_ref().map(|raider| &raider.login_name))
        }),
        Column::render("Timestamp", |raid: &Raid| {
            html! {
                <span class="text-sm text-gray-300">
                    {format_timestamp(raid.timestamp)}
                </span>
            }
        }),
        Column::field("Raid Size", |raid: &Raid| {
            raid.viewers_from_raid.to_string()
        }),
        Column::render("Stream Title", |raid: &Raid| match &raid.stream_title {
            Some(title) => html! {
                <div class="max-w-xs truncate" title={title.clone()}>
                    {title.clone()}
                </div>
            },
            None => html! {},
        }),
    ]
}

#[function_component]
pub fn RaidsResults() -> Html {
    let (state, dispatch) = use_store::<State>();

    let request_url =
        raids_url(&get_url_builder(), &state.query, state.requested_pagination());
    let raids = use_fetch::<Raids>(
        request_url,
        dispatch.reduce_mut_callback_with(State::update_pagination),
        dispatch.reduce_mut_callback_with(State::set_is_loading),
    );
    let columns = use_memo((), |_| raid_columns());

    if state.query.is_empty() {
        return html! {};
    }

    if let Some(error) = raids.error() {
        return html! { <ErrorPanel message={error.message.clone()} /> };
    }

    let channel_name = raids
        .data()
        .map(|raids| raids.channel.login_name.clone())
        .or_else(|| state.query.channel_search_query.clone())
        .unwrap_or_default();

    html! {
        <>
            <h3 class="text-center text-xl font-semibold text-gray-200 mb-4">
                {format!("Raid list for `{channel_name}`")}
            </h3>
            {
                raids.render(|raids| html! {
                    <DataDisplay<Raid>
                        data={raids.raids.clone()}
                        columns={Rc::clone(&columns)}
                        empty_message="No raids found."
                    />
                })
            }
        </>
    }
}
