use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::derive::Display;
use serde::Serialize;

/// Every way a request can fail, each with its own status code.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ApiError {
    #[display("Page or Data Not Found")]
    NotFound,
    #[display("unprocessable: {}", _0)]
    Validation(String),
    #[display("Data store unavailable")]
    StoreUnavailable,
    #[display("Method Not Allowed")]
    MethodNotAllowed,
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Logs the store failure with its full cause chain; clients only see the generic message.
    pub fn store(error: anyhow::Error) -> Self {
        tracing::error!("data store request failed: {:#}", error);
        ApiError::StoreUnavailable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
