use serde::{Deserialize, Serialize};

use crate::core::models::EmailRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailPayload {
    pub sender_address: String,
    pub recipients: Recipients,
    pub content: EmailContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipients {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAddress {
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub plain_text: String,
}

impl SendEmailPayload {
    pub fn from_request(request: &EmailRequest, sender_address: String) -> Self {
        Self {
            sender_address,
            recipients: Recipients {
                to: vec![EmailAddress {
                    address: request.to.clone(),
                }],
            },
            content: EmailContent {
                subject: request.subject.clone(),
                html: request.html_body.clone(),
                plain_text: request.plain_text.clone(),
            },
        }
    }
}

/// Body of the accepted send response and of the operation-status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SendOperationResponse {
    pub id: String,
    pub status: super::client::SendStatus,
}
