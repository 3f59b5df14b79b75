use jiff::{Timestamp, tz::TimeZone};

/// Format a timestamp in the viewer's timezone, e.g. `Mar 01, 2024 08:15 PM`.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::system())
        .strftime("%b %d, %Y %I:%M %p")
        .to_string()
}

/// Like [`format_timestamp`], with a dash for missing values.
pub fn format_optional_timestamp(timestamp: Option<Timestamp>) -> String {
    timestamp.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}
