//! email-provider - a serverless worker that dispatches transactional emails.
//!
//! The crate implements a single Lambda function triggered by an SQS queue:
//! each record body is the JSON of a contact-form submission. The worker maps
//! the submission to a confirmation [`core::models::EmailRequest`], sends it
//! through the email service REST API, and acknowledges the record only when
//! the send operation reports completion. Unusable messages and failed sends
//! are logged and left to the queue's redelivery/dead-letter policy; no local
//! retries are performed.
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - SQS for queueing between the form frontend and this worker
//! - reqwest for the email service REST API, with HMAC request signing
//! - Tokio for async runtime

// Module declarations
pub mod core;
pub mod email;
pub mod errors;
pub mod queue;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at the start of the Lambda process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
