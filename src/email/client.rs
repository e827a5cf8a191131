use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::{error, info};
use url::Url;

use super::requests::{SendEmailPayload, SendOperationResponse};
use super::signature;
use crate::core::config::{AppConfig, EmailConnection};
use crate::core::models::EmailRequest;
use crate::errors::EmailError;

const API_VERSION: &str = "2023-03-31";

// Polling defaults for waiting on the send operation, matching the provider
// SDK's wait-until-completed behavior. Not a retry policy: a terminal failure
// is returned as-is.
const POLL_INTERVAL: Duration = Duration::from_secs(1);
const MAX_POLL_ATTEMPTS: u32 = 30;

/// Status of a send operation as reported by the email service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SendStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    Canceled,
}

impl SendStatus {
    /// True only for a successfully completed send. Anything else leaves the
    /// queue message unacknowledged.
    pub fn is_completed(self) -> bool {
        matches!(self, SendStatus::Succeeded)
    }

    /// True once the operation will no longer change state. `Failed` and
    /// `Canceled` are terminal but not completed.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SendStatus::Succeeded | SendStatus::Failed | SendStatus::Canceled
        )
    }
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, request: &EmailRequest) -> Result<SendStatus, EmailError>;
}

/// Email client for a Communication Services style REST API, with HMAC
/// request signing and operation-status polling.
pub struct CommunicationEmailClient {
    http: HttpClient,
    connection: EmailConnection,
    sender_address: String,
}

impl CommunicationEmailClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, EmailError> {
        let connection = EmailConnection::parse(&config.email_connection_string)?;
        Ok(Self {
            http: HttpClient::new(),
            connection,
            sender_address: config.sender_address.clone(),
        })
    }

    fn signed_headers(
        &self,
        method: &str,
        url: &Url,
        body: &[u8],
    ) -> Result<HeaderMap, EmailError> {
        let date = signature::http_date(Utc::now());
        let content_hash = signature::content_sha256(body);
        let authorization =
            signature::sign_request(method, url, &date, &content_hash, &self.connection.access_key)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-ms-date",
            HeaderValue::from_str(&date)
                .map_err(|e| EmailError::ConfigError(format!("invalid date header: {e}")))?,
        );
        headers.insert(
            "x-ms-content-sha256",
            HeaderValue::from_str(&content_hash)
                .map_err(|e| EmailError::ConfigError(format!("invalid content hash header: {e}")))?,
        );
        headers.insert(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_str(&authorization)
                .map_err(|e| EmailError::ConfigError(format!("invalid authorization header: {e}")))?,
        );
        Ok(headers)
    }

    async fn poll_operation(&self, operation_id: &str) -> Result<SendStatus, EmailError> {
        let url = Url::parse(&format!(
            "{}/emails/operations/{}?api-version={}",
            self.connection.endpoint, operation_id, API_VERSION
        ))
        .map_err(|e| EmailError::ConfigError(format!("invalid operation URL: {e}")))?;

        let mut attempts = 0;
        loop {
            tokio::time::sleep(POLL_INTERVAL).await;
            attempts += 1;

            let headers = self.signed_headers("GET", &url, b"")?;
            let resp = self.http.get(url.clone()).headers(headers).send().await?;
            if !resp.status().is_success() {
                let status = resp.status();
                let body_text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read body>".to_string());
                return Err(EmailError::ApiError(format!(
                    "operation status request failed: status={status} body={body_text}"
                )));
            }

            let operation: SendOperationResponse = resp.json().await?;
            if operation.status.is_terminal() {
                return Ok(operation.status);
            }
            if attempts >= MAX_POLL_ATTEMPTS {
                info!(
                    "Send operation {} still {:?} after {} polls",
                    operation_id, operation.status, attempts
                );
                return Ok(operation.status);
            }
        }
    }
}

#[async_trait]
impl EmailSender for CommunicationEmailClient {
    async fn send(&self, request: &EmailRequest) -> Result<SendStatus, EmailError> {
        let url = Url::parse(&format!(
            "{}/emails:send?api-version={}",
            self.connection.endpoint, API_VERSION
        ))
        .map_err(|e| EmailError::ConfigError(format!("invalid send URL: {e}")))?;

        let payload = SendEmailPayload::from_request(request, self.sender_address.clone());
        let body = serde_json::to_vec(&payload)?;
        let headers = self.signed_headers("POST", &url, &body)?;

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("emails:send failed: status={} body={}", status, body_text);
            return Err(EmailError::ApiError(format!(
                "send request failed: status={status}"
            )));
        }

        let operation: SendOperationResponse = resp.json().await?;
        info!(
            "Send accepted for {}: operation={} status={:?}",
            request.to, operation.id, operation.status
        );

        if operation.status.is_terminal() {
            return Ok(operation.status);
        }
        self.poll_operation(&operation.id).await
    }
}
