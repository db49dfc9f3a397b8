//! Domain error to HTTP response mapping

use super::models::ErrorResponse;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Request, catch};
use tracing::{error, warn};
use trofes_domain::error::Error;

/// Error returned by API handlers, rendered as `{"detail": ...}`
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    detail: String,
}

impl ApiError {
    /// Error with an explicit status
    pub fn new<S: Into<String>>(status: Status, detail: S) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// HTTP status of the error
    pub fn status(&self) -> Status {
        self.status
    }

    /// Error detail
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::ModelUnavailable { .. } => Status::ServiceUnavailable,
            Error::InvalidArgument { .. } => Status::BadRequest,
            _ => Status::InternalServerError,
        };
        if status == Status::InternalServerError {
            error!(error = %err, "Recommendation failed");
        } else {
            warn!(status = status.code, error = %err, "Request rejected");
        }
        Self::new(status, err.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .respond_to(request)
    }
}

/// Malformed JSON body
#[catch(400)]
pub fn bad_request(_: &Request<'_>) -> ApiError {
    ApiError::new(Status::BadRequest, "Malformed request body")
}

/// Unknown route
#[catch(404)]
pub fn not_found(request: &Request<'_>) -> ApiError {
    ApiError::new(Status::NotFound, format!("No route for {}", request.uri()))
}

/// Body does not match the request schema
#[catch(422)]
pub fn unprocessable(_: &Request<'_>) -> ApiError {
    ApiError::new(
        Status::UnprocessableEntity,
        "Request body does not match the expected schema",
    )
}

/// Unhandled failure
#[catch(500)]
pub fn internal_error(_: &Request<'_>) -> ApiError {
    ApiError::new(Status::InternalServerError, "Internal server error")
}
