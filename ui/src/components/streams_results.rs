use std::rc::Rc;

use payloads::responses::{Stream, Streams};
use payloads::{FetchUrl, Pagination, ParamNames, QueryFormData, UrlBuilder};
use yew::prelude::*;
use yew::virtual_dom::Key;
use yewdux::prelude::*;

use super::{Column, DataDisplay, ErrorPanel, Keyed};
use crate::hooks::use_fetch;
use crate::utils::time::format_optional_timestamp;
use crate::{State, get_url_builder};

/// Request URL for the queried user's streams. Only the user field is used.
pub fn streams_url(
    builder: &UrlBuilder,
    query: &QueryFormData,
    pagination: Option<Pagination>,
) -> Option<String> {
    let user = query.user()?;
    let data = user.url_value();

    let request = FetchUrl::new(
        "/users/streams",
        user.param_name(ParamNames::USER),
        Some(&data),
    )
    .with_pagination(pagination);
    Some(builder.build(&request))
}

impl Keyed for Stream {
    fn row_key(&self) -> Key {
        Key::from(self.id.to_string())
    }
}

pub fn stream_columns() -> Vec<Column<Stream>> {
    vec![
        Column::field("Id", |stream: &Stream| stream.id.to_string()),
        Column::render("Title", |stream: &Stream| match &stream.title {
            Some(title) => html! {
                <div class="max-w-xs truncate" title={title.clone()}>
                    {title.clone()}
                </div>
            },
            None => html! {},
        }),
        Column::render("Start", |stream: &Stream| {
            html! { {format_optional_timestamp(stream.start_timestamp)} }
        }),
        Column::render("End", |stream: &Stream| {
            html! { {format_optional_timestamp(stream.end_timestamp)} }
        }),
        Column::render("VOD", |stream: &Stream| {
            html! { {stream.twitch_vod_id.clone().unwrap_or_else(|| "-".to_string())} }
        }),
        Column::render("Muted", |stream: &Stream| {
            let segments = stream.muted_vod_segments.len();
            if segments == 0 {
                return html! { {"-"} };
            }
            let total_seconds: i64 = stream
                .muted_vod_segments
                .iter()
                .map(|segment| segment.duration)
                .sum();
            html! {
                <span class="text-red-500" title={format!("{total_seconds} seconds muted")}>
                    {format!("Muted ({segments})")}
                </span>
            }
        }),
    ]
}

#[function_component]
pub fn StreamsResults() -> Html {
    let (state, dispatch) = use_store::<State>();

    let request_url =
        streams_url(&get_url_builder(), &state.query, state.requested_pagination());
    let streams = use_fetch::<Streams>(
        request_url,
        dispatch.reduce_mut_callback_with(State::update_pagination),
        dispatch.reduce_mut_callback_with(State::set_is_loading),
    );
    let columns = use_memo((), |_| stream_columns());

    if state.query.is_empty() {
        return html! {};
    }

    if state.query.user().is_none() {
        return html! {
            <ErrorPanel message="Enter a user to list their streams." />
        };
    }

    streams.render(|streams| {
        html! {
            <>
                <h3 class="text-center text-xl font-semibold text-gray-200 mb-4">
                    {format!("Streams for `{}`", streams.user.login_name)}
                </h3>
                <DataDisplay<Stream>
                    data={streams.streams.clone()}
                    columns={Rc::clone(&columns)}
                    empty_message="No streams found."
                />
            </>
        }
    })
}
