use chrono::{TimeZone, Utc};
use url::Url;

use email_provider::email::signature::{content_sha256, http_date, sign_request};
use email_provider::errors::EmailError;

// base64(SHA-256("")), a fixed reference value
const EMPTY_BODY_HASH: &str = "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=";

#[test]
fn test_content_sha256_of_empty_body() {
    assert_eq!(content_sha256(b""), EMPTY_BODY_HASH);
}

#[test]
fn test_content_sha256_is_deterministic() {
    let first = content_sha256(b"{\"to\":\"anna@example.com\"}");
    let second = content_sha256(b"{\"to\":\"anna@example.com\"}");
    assert_eq!(first, second);
    assert_ne!(first, content_sha256(b"{}"));
}

#[test]
fn test_http_date_is_rfc1123() {
    let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(http_date(date), "Tue, 02 Jan 2024 03:04:05 GMT");
}

#[test]
fn test_sign_request_produces_authorization_header() {
    let url = Url::parse("https://acs.example.com/emails:send?api-version=2023-03-31").unwrap();
    // "secret" in base64
    let authorization =
        sign_request("POST", &url, "Tue, 02 Jan 2024 03:04:05 GMT", EMPTY_BODY_HASH, "c2VjcmV0")
            .unwrap();

    assert!(authorization.starts_with(
        "HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature="
    ));
}

#[test]
fn test_sign_request_is_deterministic() {
    let url = Url::parse("https://acs.example.com/emails:send?api-version=2023-03-31").unwrap();
    let date = "Tue, 02 Jan 2024 03:04:05 GMT";

    let first = sign_request("POST", &url, date, EMPTY_BODY_HASH, "c2VjcmV0").unwrap();
    let second = sign_request("POST", &url, date, EMPTY_BODY_HASH, "c2VjcmV0").unwrap();
    assert_eq!(first, second);

    // A different key must produce a different signature
    let other_key = sign_request("POST", &url, date, EMPTY_BODY_HASH, "b3RoZXI=").unwrap();
    assert_ne!(first, other_key);

    // The signed string covers the HTTP method
    let other_method = sign_request("GET", &url, date, EMPTY_BODY_HASH, "c2VjcmV0").unwrap();
    assert_ne!(first, other_method);
}

#[test]
fn test_sign_request_rejects_invalid_access_key() {
    let url = Url::parse("https://acs.example.com/emails:send").unwrap();
    let result = sign_request(
        "POST",
        &url,
        "Tue, 02 Jan 2024 03:04:05 GMT",
        EMPTY_BODY_HASH,
        "not base64!!",
    );

    assert!(matches!(result, Err(EmailError::ConfigError(_))));
}
