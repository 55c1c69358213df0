use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Failure modes of the API. Database causes are logged before being
/// flattened to the wire shape, which only carries a code and a message.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Unprocessable,
    BadRequest,
    MethodNotAllowed,
    Database(sqlx::Error),
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            ApiError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "bad request"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            ApiError::Database(error) => {
                tracing::error!("Database failure: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::Database(error)
    }
}
