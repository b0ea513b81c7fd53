//! HTTP surface of the service.
//!
//! Handlers call into [`crate::services`] and return [`ServiceError`] on
//! failure; the [`ResponseError`] impl below turns it into a JSON
//! [`ErrorDetails`] body with the matching status code.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use crate::services::ServiceError;

pub mod companies;
pub mod employees;

/// Message returned for every failure that is not the client's fault.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error.";

/// Body of every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub status_code: u16,
    pub message: String,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::CompanyNotFound(_) | ServiceError::EmployeeNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ServiceError::Repository(err) => {
                log::error!("Something went wrong: {err}");
                INTERNAL_SERVER_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(ErrorDetails {
            status_code: status.as_u16(),
            message,
        })
    }
}
