use crate::models::ChatErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

/// Message shown to the user whenever a chat request cannot be answered.
pub const APOLOGY: &str = "Sorry, something went wrong with mood detection.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        error_response(status, error_message)
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    let body = Json(ChatErrorResponse {
        bot_message: APOLOGY.to_string(),
        error,
    });

    (status, body).into_response()
}

/// Turns a handler panic into the same 500 body an `AppError::Internal` produces.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Handler panicked: {}", panic_message(&*panic));

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Text of a panic payload, when it carries one.
pub fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let response =
            AppError::Internal(anyhow::anyhow!("connection pool exhausted")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["botMessage"], APOLOGY);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn validation_error_is_bad_request() {
        let response = AppError::Validation("expected JSON".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["botMessage"], APOLOGY);
        assert_eq!(body["error"], "expected JSON");
    }

    #[tokio::test]
    async fn panic_payload_maps_to_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["botMessage"], APOLOGY);
    }

    #[test]
    fn test_panic_message() {
        assert_eq!(panic_message(&"boom"), "boom");
        assert_eq!(panic_message(&"boom".to_string()), "boom");
        assert_eq!(panic_message(&42u8), "unknown panic payload");
    }
}
