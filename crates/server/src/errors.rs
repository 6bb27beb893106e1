//! HTTP error mapping.

use std::error::Error as _;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hp_runtime::ServiceError;
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::validation::FieldError;

/// Body of 404 and 500 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Player not found")]
    pub message: String,
}

impl ErrorBody {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Body of 400 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    #[schema(example = "Invalid request body.")]
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    PlayerNotFound { name: String },
    Internal(ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PlayerNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::PlayerNotFound { name } => Self::PlayerNotFound { name },
            other => Self::Internal(other),
        }
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![FieldError::body(rejection.body_text())])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errors) => {
                warn!(%status, ?errors, "invalid request body");
                let body = ValidationErrorBody {
                    message: "Invalid request body.".to_owned(),
                    errors,
                };
                (status, Json(body)).into_response()
            }
            Self::PlayerNotFound { name } => {
                warn!(%status, player = %name, "player not found");
                (status, Json(ErrorBody::new("Player not found"))).into_response()
            }
            Self::Internal(err) => {
                error!(%status, error = %error_chain(&err), "request failed");
                (status, Json(ErrorBody::new("Internal server error"))).into_response()
            }
        }
    }
}

/// `outer: inner: root` for logging.
fn error_chain(err: &ServiceError) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
