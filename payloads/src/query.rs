use serde::{Deserialize, Serialize};

/// What the user typed into the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFormData {
    /// Numeric twitch id or login name.
    pub user_search_query: String,
    pub channel_search_query: Option<String>,
}

impl QueryFormData {
    pub fn new(user: impl Into<String>, channel: Option<String>) -> Self {
        Self {
            user_search_query: user.into().trim().to_string(),
            channel_search_query: channel
                .map(|channel| channel.trim().to_string())
                .filter(|channel| !channel.is_empty()),
        }
    }

    /// The user identifier, if one was entered.
    pub fn user(&self) -> Option<Identifier> {
        Identifier::parse(&self.user_search_query)
    }

    /// The channel identifier, if one was entered.
    pub fn channel(&self) -> Option<Identifier> {
        self.channel_search_query.as_deref().and_then(Identifier::parse)
    }

    pub fn is_empty(&self) -> bool {
        self.user().is_none() && self.channel().is_none()
    }

    /// True when `other` targets a different user or channel.
    pub fn is_new_search(&self, other: &QueryFormData) -> bool {
        self.user() != other.user() || self.channel() != other.channel()
    }
}

/// A user or channel reference, resolved once from form input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Identifier {
    #[display("{_0}")]
    ByNumericId(u64),
    #[display("{_0}")]
    ByLoginName(String),
}

impl Identifier {
    /// Parses raw form input. Blank input is no identifier at all.
    ///
    /// Zero is not a valid twitch id, so `"0"` is treated as a login name.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match raw.parse::<u64>() {
            Ok(id) if id != 0 => Some(Self::ByNumericId(id)),
            _ => Some(Self::ByLoginName(raw.to_string())),
        }
    }

    /// Picks the query parameter name matching this identifier's kind.
    pub fn param_name(&self, names: ParamNames) -> &'static str {
        match self {
            Self::ByNumericId(_) => names.by_id,
            Self::ByLoginName(_) => names.by_login,
        }
    }

    /// The value as it goes into a URL. Login names are percent-encoded so
    /// `&`, `#` or `/` in the input cannot add parameters or path segments.
    pub fn url_value(&self) -> String {
        match self {
            Self::ByNumericId(id) => id.to_string(),
            Self::ByLoginName(login) => urlencoding::encode(login).into_owned(),
        }
    }

    /// Formats this identifier as `name=value` for the given parameter pair.
    pub fn query_fragment(&self, names: ParamNames) -> String {
        format!("{}={}", self.param_name(names), self.url_value())
    }
}

/// The pair of query keys a backend route accepts for one identifier slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamNames {
    pub by_id: &'static str,
    pub by_login: &'static str,
}

impl ParamNames {
    pub const USER: ParamNames = ParamNames {
        by_id: "user_id",
        by_login: "maybe_login",
    };
    pub const CHANNEL: ParamNames = ParamNames {
        by_id: "channel_id",
        by_login: "channel_login",
    };
    pub const RAIDER: ParamNames = ParamNames {
        by_id: "raider_id",
        by_login: "raider_login",
    };
}
