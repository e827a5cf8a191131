use std::env;

use crate::errors::EmailError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub email_connection_string: String,
    pub sender_address: String,
    pub email_queue_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            email_connection_string: env::var("EMAIL_CONNECTION_STRING")
                .map_err(|e| format!("EMAIL_CONNECTION_STRING: {}", e))?,
            sender_address: env::var("SENDER_ADDRESS")
                .map_err(|e| format!("SENDER_ADDRESS: {}", e))?,
            email_queue_url: env::var("EMAIL_QUEUE_URL")
                .map_err(|e| format!("EMAIL_QUEUE_URL: {}", e))?,
        })
    }
}

/// Parsed form of the email service connection string, e.g.
/// `endpoint=https://example.communication.azure.com/;accesskey=BASE64KEY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConnection {
    pub endpoint: String,
    pub access_key: String,
}

impl EmailConnection {
    /// Keys are matched case-insensitively; empty segments (trailing
    /// semicolons) are ignored. Both `endpoint` and `accesskey` are required.
    pub fn parse(connection_string: &str) -> Result<Self, EmailError> {
        let mut endpoint = None;
        let mut access_key = None;

        for segment in connection_string.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((key, value)) = segment.split_once('=') else {
                return Err(EmailError::ConfigError(format!(
                    "malformed connection string segment: {segment}"
                )));
            };
            match key.trim().to_ascii_lowercase().as_str() {
                "endpoint" => endpoint = Some(value.trim().to_string()),
                "accesskey" => access_key = Some(value.trim().to_string()),
                other => {
                    return Err(EmailError::ConfigError(format!(
                        "unknown connection string key: {other}"
                    )));
                }
            }
        }

        let endpoint = endpoint
            .filter(|e| !e.is_empty())
            .ok_or_else(|| EmailError::ConfigError("connection string is missing endpoint".into()))?;
        let access_key = access_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| EmailError::ConfigError("connection string is missing accesskey".into()))?;

        // Validate early so a bad endpoint fails at startup, not mid-send.
        url::Url::parse(&endpoint)
            .map_err(|e| EmailError::ConfigError(format!("invalid endpoint URL: {e}")))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_key,
        })
    }
}
