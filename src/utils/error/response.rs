//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

/// Error categories exposed to clients in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidRequestError,
    InternalError,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::InvalidRequestError => StatusCode::BAD_REQUEST,
            ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// OpenAI-style error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

impl ErrorBody {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                kind,
            },
        }
    }
}

impl GatewayError {
    /// Category reported to the client
    pub fn kind(&self) -> ErrorKind {
        if self.is_client_error() {
            ErrorKind::InvalidRequestError
        } else {
            ErrorKind::InternalError
        }
    }

    /// Message reported to the client
    ///
    /// Only client errors are described; everything else is opaque and its
    /// detail stays in the server log.
    pub fn client_message(&self) -> String {
        match self {
            GatewayError::InvalidRequest(msg) | GatewayError::Validation(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody::new(self.kind(), self.client_message());
        HttpResponse::build(self.status_code()).json(body)
    }
}
