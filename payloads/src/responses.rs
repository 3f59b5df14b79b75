use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Page metadata attached to every list response.
///
/// Pages are 1-indexed; the backend clamps `page_size` to its own limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u64,
}

impl Pagination {
    pub const FIRST_PAGE: u64 = 1;

    /// Pagination pointing at a specific page with no backend metadata yet.
    pub fn at_page(page: u64) -> Self {
        Self {
            page: page.max(Self::FIRST_PAGE),
            page_size: 0,
            total_items: 0,
            total_pages: 0,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > Self::FIRST_PAGE
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// The wrapper every backend response arrives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// A tracked twitch account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub twitch_id: i64,
    pub display_name: String,
    pub login_name: String,
}

/// A donator the backend could not match to a twitch account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownUser {
    pub id: i64,
    pub name: String,
    pub created_at: Timestamp,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum EventType {
    StreamlabsDonation,
    GiftSubs,
    Bits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub event_type: EventType,
    pub amount: Decimal,
    pub timestamp: Timestamp,
    pub donator: Option<User>,
    pub donation_receiver: User,
    pub stream: Option<Stream>,
    pub subscription_tier: Option<i32>,
    pub unknown_user: Option<UnknownUser>,
}

impl Donation {
    /// The name to show for whoever sent the donation, if known at all.
    pub fn donator_name(&self) -> Option<&str> {
        self.donator
            .as_ref()
            .map(|user| user.login_name.as_str())
            .or_else(|| self.unknown_user.as_ref().map(|user| user.name.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raid {
    pub id: i64,
    pub raider: Option<User>,
    pub timestamp: Timestamp,
    pub viewers_from_raid: i64,
    pub stream_title: Option<String>,
}

/// Raids received by a single channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raids {
    pub channel: User,
    pub raids: Vec<Raid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutedVodSegment {
    /// Offset into the VOD, formatted as `hh:mm:ss`.
    pub start: String,
    /// In seconds.
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    pub id: i64,
    pub twitch_stream_id: u64,
    pub start_timestamp: Option<Timestamp>,
    pub end_timestamp: Option<Timestamp>,
    pub twitch_vod_id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub muted_vod_segments: Vec<MutedVodSegment>,
}

/// Streams belonging to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streams {
    pub user: User,
    pub streams: Vec<Stream>,
}
