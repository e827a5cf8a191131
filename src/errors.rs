use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Failed to parse queue message: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Email service rejected the request: {0}")]
    ApiError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<reqwest::Error> for EmailError {
    fn from(error: reqwest::Error) -> Self {
        EmailError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for EmailError {
    fn from(error: anyhow::Error) -> Self {
        EmailError::ApiError(error.to_string())
    }
}

impl From<serde_json::Error> for EmailError {
    fn from(error: serde_json::Error) -> Self {
        EmailError::ParseError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_sqs::error::SdkError<E, R>> for EmailError
where
    E: std::fmt::Debug,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_sqs::error::SdkError<E, R>) -> Self {
        EmailError::AwsError(format!("{error:?}"))
    }
}
