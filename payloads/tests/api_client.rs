use payloads::api_client::{error_message, ok_body};
use payloads::responses::Raids;
use payloads::{APIClient, ClientError, Envelope};
use reqwest::StatusCode;

fn response(status: u16, body: &str) -> reqwest::Response {
    http::Response::builder()
        .status(status)
        .body(body.to_string())
        .unwrap()
        .into()
}

const RAIDS_BODY: &str = r#"{
    "data": {
        "channel": {
            "id": 1, "twitch_id": 1001,
            "display_name": "Foo", "login_name": "foo"
        },
        "raids": [
            {
                "id": 10,
                "raider": {
                    "id": 2, "twitch_id": 1002,
                    "display_name": "Bar", "login_name": "bar"
                },
                "timestamp": "2024-05-01T20:00:00Z",
                "viewers_from_raid": 35,
                "stream_title": "late night"
            },
            {
                "id": 11,
                "raider": null,
                "timestamp": "2024-05-02T20:00:00Z",
                "viewers_from_raid": 3,
                "stream_title": null
            }
        ]
    },
    "pagination": {
        "total_items": 2, "total_pages": 1, "page": 1, "page_size": 50
    }
}"#;

#[tokio::test]
async fn test_envelope_decodes() {
    let envelope: Envelope<Raids> =
        ok_body(response(200, RAIDS_BODY)).await.unwrap();

    assert_eq!(envelope.data.channel.login_name, "foo");
    assert_eq!(envelope.data.raids.len(), 2);
    assert_eq!(envelope.data.raids[1].raider, None);

    let pagination = envelope.pagination.unwrap();
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.total_pages, 1);
    assert!(!pagination.has_next());
}

#[tokio::test]
async fn test_non_success_carries_body_message() {
    let result = ok_body::<Envelope<Raids>>(response(
        404,
        r#"{"message":"Could not find user by login name: nobody"}"#,
    ))
    .await;

    match result {
        Err(ClientError::APIError(status, message)) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Could not find user by login name: nobody");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let result = ok_body::<Envelope<Raids>>(response(200, "{}")).await;
    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.to_string(), "Unexpected response from the server.");
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let client = APIClient::new("http://127.0.0.1:1");
    let url = format!("{}/donations?maybe_login=foo", client.address);

    let err = client.get_envelope::<Vec<i64>>(&url).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.to_string(), "Network error. Please check your connection.");
}

#[test]
fn test_error_message_sources() {
    let status = StatusCode::BAD_REQUEST;
    assert_eq!(error_message(status, r#"{"error":"bad page"}"#), "bad page");
    assert_eq!(error_message(status, "plain text failure"), "plain text failure");
    assert_eq!(error_message(status, ""), "Request failed: 400 Bad Request");
    assert_eq!(
        error_message(status, r#"{"message":"  "}"#),
        "Request failed: 400 Bad Request"
    );
}
