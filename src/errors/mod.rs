use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_INVALID_ARGUMENT, CODE_MALFORMED_REQUEST, CODE_USER_NOT_FOUND,
    CODE_WRITE_FAILED, ERR_DELETE_FAILED, ERR_INSERT_FAILED, ERR_INTERNAL, ERR_MALFORMED_REQUEST,
    ERR_UPDATE_FAILED, ERR_USER_NOT_FOUND,
};
use crate::models::ErrorResponse;

/// The statement kind that affected no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Insert,
    Update,
    Delete,
}

impl WriteOperation {
    fn message(self) -> &'static str {
        match self {
            WriteOperation::Insert => ERR_INSERT_FAILED,
            WriteOperation::Update => ERR_UPDATE_FAILED,
            WriteOperation::Delete => ERR_DELETE_FAILED,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// A required request field was missing or empty.
    InvalidArgument { field: &'static str },
    /// The request parameters could not be parsed at all.
    MalformedRequest { detail: String },
    /// A lookup by name matched no row.
    NotFound { name: String },
    /// An insert, update or delete affected zero rows.
    WriteFailure { operation: WriteOperation, id: String },
    /// The store itself failed. The detail is logged, never returned.
    Internal { message: String },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument { .. } => CODE_INVALID_ARGUMENT,
            ApiError::MalformedRequest { .. } => CODE_MALFORMED_REQUEST,
            ApiError::NotFound { .. } => CODE_USER_NOT_FOUND,
            ApiError::WriteFailure { .. } => CODE_WRITE_FAILED,
            ApiError::Internal { .. } => CODE_INTERNAL_ERROR,
        }
    }

    /// Message safe to show to API clients.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InvalidArgument { field } => format!("{} is empty", field),
            ApiError::MalformedRequest { detail } => {
                format!("{}: {}", ERR_MALFORMED_REQUEST, detail)
            }
            ApiError::NotFound { .. } => ERR_USER_NOT_FOUND.to_string(),
            ApiError::WriteFailure { operation, .. } => operation.message().to_string(),
            ApiError::Internal { .. } => ERR_INTERNAL.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidArgument { field } => {
                write!(f, "Invalid Argument [{}]: {} is empty", CODE_INVALID_ARGUMENT, field)
            }
            ApiError::MalformedRequest { detail } => {
                write!(f, "Malformed Request [{}]: {}", CODE_MALFORMED_REQUEST, detail)
            }
            ApiError::NotFound { name } => {
                write!(f, "Not Found [{}]: no user named {:?}", CODE_USER_NOT_FOUND, name)
            }
            ApiError::WriteFailure { operation, id } => {
                write!(
                    f,
                    "Write Failure [{}]: {} for id {}",
                    CODE_WRITE_FAILED,
                    operation.message(),
                    id
                )
            }
            ApiError::Internal { message } => {
                write!(f, "Internal Server Error [{}]: {}", CODE_INTERNAL_ERROR, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Client-side failures all share 400; the code field tells them apart.
            ApiError::InvalidArgument { .. }
            | ApiError::MalformedRequest { .. }
            | ApiError::NotFound { .. }
            | ApiError::WriteFailure { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message: self.public_message(),
        })
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {}", err);
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let errors = [
            ApiError::InvalidArgument { field: "name" },
            ApiError::MalformedRequest {
                detail: "EOF while parsing".to_string(),
            },
            ApiError::NotFound {
                name: "Alice".to_string(),
            },
            ApiError::WriteFailure {
                operation: WriteOperation::Delete,
                id: "u1".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{}", err);
        }
    }

    #[test]
    fn test_invalid_argument_names_field() {
        let err = ApiError::InvalidArgument { field: "email" };
        assert_eq!(err.public_message(), "email is empty");
        assert_eq!(err.code(), CODE_INVALID_ARGUMENT);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let err = ApiError::Internal {
            message: "disk I/O error at /var/lib/users.db".to_string(),
        };
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], CODE_INTERNAL_ERROR);
        assert_eq!(json["message"], ERR_INTERNAL);
        assert!(!String::from_utf8_lossy(&body).contains("/var/lib"));
    }
}
