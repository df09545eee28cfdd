use bytes::Bytes;
use http::{header, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// API-level error taxonomy shared by request handlers and middleware.
///
/// Every variant carries the human-readable detail that ends up in the
/// response body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
    status: u16,
}

impl ApiError {
    /// HTTP status code the error translates to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Detail message carried by the error
    pub fn detail(&self) -> &str {
        match self {
            ApiError::BadRequest(detail)
            | ApiError::Unauthorized(detail)
            | ApiError::Forbidden(detail)
            | ApiError::NotFound(detail)
            | ApiError::Conflict(detail)
            | ApiError::Internal(detail) => detail,
        }
    }

    /// Render the error as a JSON response
    ///
    /// # Example
    /// ```
    /// use swim_backend::errors::ApiError;
    ///
    /// let response = ApiError::Forbidden("Admin rights required".to_string()).into_response();
    /// assert_eq!(response.status(), 403);
    /// ```
    pub fn into_response(self) -> Response<Bytes> {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.detail(),
            status: status.as_u16(),
        };

        Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }
}
