//! Integration tests for the TwilioClient using mockito for HTTP mocking.

use mockito::{Matcher, Server};
use sms_blast::{MessageSender, PhoneNumber, ProviderCredentials, ProviderError, TwilioClient};

const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC123/Messages.json";

fn credentials() -> ProviderCredentials {
    ProviderCredentials {
        account_id: "AC123".to_string(),
        auth_id: "SK456".to_string(),
        auth_secret: "shh".to_string(),
        sender_number: "+15550001111".to_string(),
    }
}

fn phone(raw: &str) -> PhoneNumber {
    PhoneNumber::normalize(raw).unwrap()
}

#[test]
fn test_send_message() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", MESSAGES_PATH)
        .match_header("authorization", "Basic U0s0NTY6c2ho")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("To".into(), "+15551234567".into()),
            Matcher::UrlEncoded("From".into(), "+15550001111".into()),
            Matcher::UrlEncoded("Body".into(), "Party at 8 & bring snacks".into()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"sid": "SM1", "status": "queued"}"#)
        .expect(1)
        .create();

    let client = TwilioClient::with_base_url(server.url(), credentials());
    let resource = client
        .send_message(&phone("555-123-4567"), "Party at 8 & bring snacks")
        .unwrap();

    mock.assert();
    assert_eq!(resource["sid"], "SM1");
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_send_message_error_status() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", MESSAGES_PATH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": 21211, "message": "The 'To' number is not a valid phone number."}"#)
        .create();

    let client = TwilioClient::with_base_url(server.url(), credentials());
    let result = client.send_message(&phone("555-123-4567"), "hi");

    mock.assert();
    match result {
        Err(err @ ProviderError::Status { .. }) => {
            assert!(err.to_string().starts_with("bad status code: 400"));
            if let ProviderError::Status { status, message, .. } = err {
                assert_eq!(status, 400);
                assert!(message.contains("21211"));
            }
        }
        other => panic!("Expected Status error, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_send_message_unauthorized() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", MESSAGES_PATH)
        .with_status(401)
        .with_body("Authenticate")
        .create();

    let client = TwilioClient::with_base_url(server.url(), credentials());
    let result = client.send_message(&phone("555-123-4567"), "hi");

    mock.assert();
    assert!(matches!(
        result,
        Err(ProviderError::Status { status: 401, .. })
    ));
}

#[test]
fn test_send_message_unparseable_success_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", MESSAGES_PATH)
        .with_status(200)
        .with_body("<html>ok</html>")
        .create();

    let client = TwilioClient::with_base_url(server.url(), credentials());
    let result = client.send_message(&phone("555-123-4567"), "hi");

    mock.assert();
    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_send_message_non_object_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", MESSAGES_PATH)
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body("[1, 2, 3]")
        .create();

    let client = TwilioClient::with_base_url(server.url(), credentials());
    let result = client.send_message(&phone("555-123-4567"), "hi");

    mock.assert();
    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

#[test]
fn test_send_message_connection_refused() {
    // Nothing listens on port 1.
    let client = TwilioClient::with_base_url("http://127.0.0.1:1".to_string(), credentials());
    let result = client.send_message(&phone("555-123-4567"), "hi");

    assert!(matches!(
        result,
        Err(ProviderError::Transport(_)) | Err(ProviderError::Timeout)
    ));
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 1);
}
