use thiserror::Error;

use crate::ErrorBody;

pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while analyzing the image";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please select an image first")]
    NoImageSelected,
    #[error("An analysis is already in progress")]
    AlreadySubmitting,
    #[error("This image has already been analyzed")]
    AlreadyResolved,
}

impl SubmitError {
    /// Only the missing-image case is shown to the user; the others are
    /// re-entry attempts the UI already prevents.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, SubmitError::NoImageSelected)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Service { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
}

impl PredictError {
    pub fn from_status(status: u16, body: &str) -> Self {
        PredictError::Service {
            status,
            message: ErrorBody::message_from(body),
        }
    }

    /// Message shown in the failed state: the service's own error string
    /// when it sent one, the generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Service {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base URL `{value}`: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported scheme `{scheme}` in API base URL `{value}`")]
    UnsupportedScheme { value: String, scheme: String },
}
