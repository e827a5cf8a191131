//! HMAC-SHA256 request signing for the Communication Services REST API.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use url::Url;

use crate::errors::EmailError;

/// Base64-encoded SHA-256 digest of the request body, sent as
/// `x-ms-content-sha256`.
pub fn content_sha256(body: &[u8]) -> String {
    BASE64.encode(Sha256::digest(body))
}

/// RFC 1123 timestamp for the `x-ms-date` header.
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Compute the `Authorization` header for a signed request.
///
/// The string to sign is `VERB\npath_and_query\ndate;host;content_hash`, keyed
/// with the base64-decoded access key from the connection string.
pub fn sign_request(
    method: &str,
    url: &Url,
    date: &str,
    content_hash: &str,
    access_key: &str,
) -> Result<String, EmailError> {
    let host = url
        .host_str()
        .ok_or_else(|| EmailError::ConfigError(format!("endpoint has no host: {url}")))?;
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let path_and_query = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };

    let string_to_sign = format!("{method}\n{path_and_query}\n{date};{host};{content_hash}");

    let key = BASE64
        .decode(access_key)
        .map_err(|e| EmailError::ConfigError(format!("access key is not valid base64: {e}")))?;
    let mut mac = Hmac::<Sha256>::new_from_slice(&key)
        .map_err(|e| EmailError::ConfigError(format!("failed to create HMAC: {e}")))?;
    mac.update(string_to_sign.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    Ok(format!(
        "HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature={signature}"
    ))
}
