use std::rc::Rc;

use payloads::responses::{Donation, EventType};
use payloads::{FetchUrl, Pagination, ParamNames, QueryFormData, UrlBuilder};
use yew::prelude::*;
use yew::virtual_dom::Key;
use yewdux::prelude::*;

use super::{Column, DataDisplay, Keyed};
use crate::hooks::use_fetch;
use crate::utils::time::format_timestamp;
use crate::{State, get_url_builder};

/// Request URL for the donations matching `query`, if anything was entered.
///
/// The user is the primary filter; a channel narrows results to donations
/// that channel received.
pub fn donations_url(
    builder: &UrlBuilder,
    query: &QueryFormData,
    pagination: Option<Pagination>,
) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let user = query.user();
    let data_name = user
        .as_ref()
        .map_or(ParamNames::USER.by_login, |user| user.param_name(ParamNames::USER));
    let data = user.map(|user| user.url_value());
    let channel = query.channel().map(|channel| channel.url_value());

    let request = FetchUrl::new("/donations", data_name, data.as_deref())
        .with_pagination(pagination)
        .with_channel(channel.as_deref());
    Some(builder.build(&request))
}

fn amount_color(subscription_tier: Option<i32>) -> Option<&'static str> {
    match subscription_tier {
        Some(2) => Some("red"),
        Some(3) => Some("#6495ED"),
        _ => None,
    }
}

impl Keyed for Donation {
    fn row_key(&self) -> Key {
        Key::from(self.id.to_string())
    }
}

pub fn donation_columns() -> Vec<Column<Donation>> {
    vec![
        Column::field("Id", |donation: &Donation| donation.id.to_string()),
        Column::render("Timestamp", |donation: &Donation| {
            html! {
                <span class="text-sm text-gray-300">
                    {format_timestamp(donation.timestamp)}
                </span>
            }
        }),
        Column::render("Donation Type", |donation: &Donation| {
            let title = (donation.event_type == EventType::GiftSubs).then(|| {
                match donation.subscription_tier {
                    Some(tier) => format!("Tier {tier}"),
                    None => "Tier Unknown".to_string(),
                }
            });
            html! { <span {title}>{donation.event_type.to_string()}</span> }
        }),
        Column::render("Amount", |donation: &Donation| {
            let style = amount_color(donation.subscription_tier)
                .map(|color| format!("color: {color}"));
            html! { <span {style}>{donation.amount.to_string()}</span> }
        }),
        Column::render("Donator Name", |donation: &Donation| {
            let name = donation.donator_name().unwrap_or_default().to_string();
            if donation.unknown_user.is_some() {
                html! { <span style="color: red" title="Unknown user">{name}</span> }
            } else {
                html! { {name} }
            }
        }),
        Column::render("Channel Name", |donation: &Donation| {
            html! { {donation.donation_receiver.login_name.clone()} }
        }),
    ]
}

#[function_component]
pub fn DonationsResults() -> Html {
    let (state, dispatch) = use_store::<State>();

    let request_url = donations_url(
        &get_url_builder(),
        &state.query,
        state.requested_pagination(),
    );
    let donations = use_fetch::<Vec<Donation>>(
        request_url,
        dispatch.reduce_mut_callback_with(State::update_pagination),
        dispatch.reduce_mut_callback_with(State::set_is_loading),
    );
    let columns = use_memo((), |_| donation_columns());

    if state.query.is_empty() {
        return html! {};
    }

    donations.render(|donations| {
        html! {
            <DataDisplay<Donation>
                data={donations.clone()}
                columns={Rc::clone(&columns)}
                empty_message="No donations found."
            />
        }
    })
}
