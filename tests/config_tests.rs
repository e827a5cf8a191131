use email_provider::core::config::EmailConnection;
use email_provider::errors::EmailError;

#[test]
fn test_parse_connection_string() {
    let connection = EmailConnection::parse(
        "endpoint=https://example.communication.azure.com/;accesskey=c2VjcmV0",
    )
    .unwrap();

    // Trailing slash on the endpoint is normalized away
    assert_eq!(connection.endpoint, "https://example.communication.azure.com");
    assert_eq!(connection.access_key, "c2VjcmV0");
}

#[test]
fn test_parse_is_case_insensitive_and_tolerates_whitespace() {
    let connection =
        EmailConnection::parse(" Endpoint=https://acs.example.com ; AccessKey=abc123 ; ").unwrap();

    assert_eq!(connection.endpoint, "https://acs.example.com");
    assert_eq!(connection.access_key, "abc123");
}

#[test]
fn test_parse_requires_endpoint() {
    let result = EmailConnection::parse("accesskey=abc123");
    match result {
        Err(EmailError::ConfigError(msg)) => assert!(msg.contains("endpoint")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_parse_requires_access_key() {
    let result = EmailConnection::parse("endpoint=https://acs.example.com");
    match result {
        Err(EmailError::ConfigError(msg)) => assert!(msg.contains("accesskey")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result =
        EmailConnection::parse("endpoint=https://acs.example.com;accesskey=abc;extra=1");
    assert!(matches!(result, Err(EmailError::ConfigError(_))));
}

#[test]
fn test_parse_rejects_segments_without_equals() {
    let result = EmailConnection::parse("endpoint");
    assert!(matches!(result, Err(EmailError::ConfigError(_))));
}

#[test]
fn test_parse_rejects_invalid_endpoint_url() {
    let result = EmailConnection::parse("endpoint=not a url;accesskey=abc123");
    match result {
        Err(EmailError::ConfigError(msg)) => assert!(msg.contains("endpoint URL")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}
