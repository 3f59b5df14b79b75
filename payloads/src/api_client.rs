use crate::Envelope;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    async fn empty_get(&self, url: &str) -> ReqwestResult {
        self.inner_client.get(url).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch one enveloped response from a fully built URL.
    pub async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Envelope<T>, ClientError> {
        tracing::debug!("GET {url}");
        let response = self.empty_get(url).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success response, containing the message to display.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
}

/// Deserialize a successful response body into an envelope, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::warn!("request failed with {status}: {body}");
        return Err(ClientError::APIError(status, error_message(status, &body)));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Pull a human readable message out of an error body.
///
/// JSON bodies are searched for a `message` or `error` string; anything else
/// non-blank is used verbatim.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();

    if let Ok(serde_json::Value::Object(fields)) =
        serde_json::from_str::<serde_json::Value>(body)
    {
        let message = ["message", "error"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(|value| value.as_str()))
            .map(str::trim)
            .filter(|message| !message.is_empty());
        if let Some(message) = message {
            return message.to_string();
        }
    } else if !body.is_empty() {
        return body.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("Request failed: {} {reason}", status.as_u16()),
        None => format!("Request failed with status {}", status.as_u16()),
    }
}
