//! Composition of backend request URLs from structured query parameters.

use crate::Pagination;

/// Everything needed to address one backend list request.
///
/// Empty strings count as absent, the same as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchUrl<'a> {
    /// Route under the backend origin, starting with `/`.
    pub route: &'a str,
    /// Name of the primary filter parameter, e.g. `user_id`.
    pub data_name: &'a str,
    /// Value of the primary filter parameter.
    pub data: Option<&'a str>,
    pub pagination: Option<Pagination>,
    /// Channel login prefixed onto the route as `/{channel}{route}`.
    pub channel: Option<&'a str>,
    /// Pre-formatted extra query fragment such as `&raider_login=bar`.
    pub additional: Option<&'a str>,
}

impl<'a> FetchUrl<'a> {
    pub fn new(route: &'a str, data_name: &'a str, data: Option<&'a str>) -> Self {
        Self {
            route,
            data_name,
            data,
            ..Self::default()
        }
    }

    pub fn with_pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_channel(mut self, channel: Option<&'a str>) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_additional(mut self, additional: Option<&'a str>) -> Self {
        self.additional = additional;
        self
    }
}

/// Builds absolute request URLs against a fixed backend origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    origin: String,
}

impl UrlBuilder {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Builds `{origin}[/{channel}]{route}[?{data_name}={data}][&page={n}][&{additional}]`.
    ///
    /// The first fragment present is introduced with `?` and every later one
    /// with `&`. A leading `&` on `additional` is taken as its joiner rather
    /// than doubled.
    pub fn build(&self, request: &FetchUrl<'_>) -> String {
        let mut url = self.origin.clone();

        if let Some(channel) = present(request.channel) {
            url.push('/');
            url.push_str(channel);
        }
        url.push_str(request.route);

        let mut has_query = false;
        let mut push_fragment = |url: &mut String, fragment: &str| {
            url.push(if has_query { '&' } else { '?' });
            url.push_str(fragment);
            has_query = true;
        };

        if let Some(data) = present(request.data) {
            push_fragment(&mut url, &format!("{}={data}", request.data_name));
        }

        if let Some(pagination) = request.pagination {
            push_fragment(&mut url, &format!("page={}", pagination.page));
        }

        if let Some(additional) = present(request.additional) {
            let additional = additional.strip_prefix('&').unwrap_or(additional);
            if !additional.is_empty() {
                push_fragment(&mut url, additional);
            }
        }

        url
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_trailing_slash_is_dropped() {
        let builder = UrlBuilder::new("http://localhost:8080/");
        assert_eq!(builder.origin(), "http://localhost:8080");
        assert_eq!(
            builder.build(&FetchUrl::new("/donations", "user_id", None)),
            "http://localhost:8080/donations"
        );
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let builder = UrlBuilder::new("http://api");
        let request = FetchUrl::new("/donations", "user_id", Some(""))
            .with_channel(Some(""))
            .with_additional(Some("&"));
        assert_eq!(builder.build(&request), "http://api/donations");
    }
}
