pub mod request_gate;
pub mod use_fetch;

pub use request_gate::{RequestGate, RequestTicket};
pub use use_fetch::{FetchDriver, FetchHookReturn, use_fetch};

use payloads::ClientError;

/// A failed fetch, reduced to what the UI displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
}

impl From<&ClientError> for FetchError {
    fn from(error: &ClientError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Data owned by a fetch hook. Data and error never coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}
