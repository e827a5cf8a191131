use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::{EmailRequest, FormSubmission};
use crate::email::{CommunicationEmailClient, EmailSender};
use crate::errors::EmailError;

/// Partial-batch response for an SQS-triggered Lambda. Records listed here are
/// redelivered by the queue; records omitted are deleted (acknowledged).
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SqsBatchResponse {
    pub batch_item_failures: Vec<BatchItemFailure>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemFailure {
    pub item_identifier: String,
}

/// Lambda handler for the email worker. Parses each SQS record into a form
/// submission, sends the confirmation email, and acknowledges the record only
/// when the send reports completion.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<SqsBatchResponse, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let sender = CommunicationEmailClient::from_config(&config).map_err(|e| {
        error!("Email client error: {}", e);
        Error::from(e)
    })?;

    let records = event
        .payload
        .get("Records")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::from("SQS event has no Records"))?;

    Ok(process_records(records, &sender).await)
}

/// Process every record in the event. Failures never abort the invocation:
/// each failed record is logged and reported back for redelivery.
pub async fn process_records(records: &[Value], sender: &dyn EmailSender) -> SqsBatchResponse {
    let mut batch_item_failures = Vec::new();

    for record in records {
        // A record without a messageId cannot be reported back for redelivery,
        // so skipping it deletes it with the rest of the batch. Real SQS events
        // always carry one; siblings are unaffected either way.
        let Some(message_id) = record.get("messageId").and_then(Value::as_str) else {
            error!("SQS record has no messageId, skipping: {:?}", record);
            continue;
        };
        info!("Received message with ID: {}", message_id);

        if let Err(e) = handle_record(record, sender).await {
            error!("Leaving message {} unacknowledged: {}", message_id, e);
            batch_item_failures.push(BatchItemFailure {
                item_identifier: message_id.to_string(),
            });
        }
    }

    SqsBatchResponse {
        batch_item_failures,
    }
}

async fn handle_record(record: &Value, sender: &dyn EmailSender) -> Result<(), EmailError> {
    let body = record
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| EmailError::ParseError("record has no string body".to_string()))?;

    let submission: FormSubmission = serde_json::from_str(body)?;
    let request = EmailRequest::confirmation(&submission);
    if !request.has_recipient() {
        return Err(EmailError::ParseError("recipient address is empty".to_string()));
    }

    let status = sender.send(&request).await?;
    if !status.is_completed() {
        return Err(EmailError::ApiError(format!(
            "send did not complete: {status:?}"
        )));
    }

    info!("Confirmation email sent to {}", request.to);
    Ok(())
}

pub use self::function_handler as handler;
