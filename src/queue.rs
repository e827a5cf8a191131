use aws_sdk_sqs::Client as SqsClient;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::FormSubmission;
use crate::errors::EmailError;

/// Enqueue a confirmation request for a submitter on the email queue, where
/// the worker picks it up and dispatches the confirmation email.
///
/// # Errors
///
/// Returns an error if serialization fails or the message cannot be sent to SQS.
pub async fn queue_confirmation_request(
    to_email: &str,
    name: &str,
    config: &AppConfig,
) -> Result<(), EmailError> {
    let submission = FormSubmission {
        name: name.to_string(),
        email: to_email.to_string(),
    };

    let queue_url = &config.email_queue_url;
    let shared_config = aws_config::from_env().load().await;
    let client = SqsClient::new(&shared_config);
    let message_body = serde_json::to_string(&submission)?;

    client
        .send_message()
        .queue_url(queue_url)
        .message_body(message_body)
        .send()
        .await
        .map_err(|e| EmailError::AwsError(format!("Failed to send message to SQS: {e}")))?;

    info!("Confirmation email request queued for {}", to_email);
    Ok(())
}
