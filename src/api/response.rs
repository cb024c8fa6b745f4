use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;

const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn error(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    let error = if message.is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message.to_string()
    };

    (status, Json(ErrorResponse { error }))
}
