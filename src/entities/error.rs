use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::result::Error as DieselError;
use serde::Serialize;
use serde_json::Error as SerdeError;

pub struct ApiError {
    pub status_code: u16,
    pub error_type: ErrorType,
    pub message: String,
}

pub enum ErrorType {
    InternalError,
    DatabaseError,
    RequestError,
}

impl ApiError {
    pub fn new(status_code: u16, error_type: ErrorType, message: String) -> ApiError {
        tracing::error!("status code: {status_code}; message: {message}");
        ApiError {
            status_code,
            error_type,
            message,
        }
    }

    pub fn bad_request(message: &str) -> ApiError {
        ApiError::new(400, ErrorType::RequestError, message.to_string())
    }

    pub fn not_found(message: &str) -> ApiError {
        ApiError::new(404, ErrorType::RequestError, message.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            success: false,
            message: self.message,
        };
        (status, Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl From<DieselError> for ApiError {
    fn from(error: DieselError) -> ApiError {
        match error {
            DieselError::DatabaseError(_, err) => {
                ApiError::new(500, ErrorType::DatabaseError, err.message().to_string())
            }
            DieselError::NotFound => ApiError::not_found("Book not found"),
            err => ApiError::new(500, ErrorType::DatabaseError, format!("Diesel error: {}", err)),
        }
    }
}

impl From<SerdeError> for ApiError {
    fn from(error: SerdeError) -> ApiError {
        ApiError::new(400, ErrorType::RequestError, format!("serde error : {}", error))
    }
}
