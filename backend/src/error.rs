use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum AppError {
    /// The request was understood but failed validation.
    #[error("{0}")]
    Validation(String),
    #[error("Not Found")]
    NotFound,
    /// The development asset server could not be reached.
    #[error("dev server unavailable: {0}")]
    DevServer(#[from] reqwest::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DevServer(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Validation(message) => json!({ "success": false, "message": message }),
            AppError::NotFound => json!({ "message": self.to_string() }),
            AppError::DevServer(e) => {
                tracing::warn!("dev server request failed: {}", e);
                json!({ "message": self.to_string() })
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {:#}", e);
                sentry::capture_message(&format!("{:#}", e), sentry::Level::Error);
                json!({ "message": INTERNAL_SERVER_ERROR })
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into a 500 so the server keeps running.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("handler panicked: {}", detail);
    sentry::capture_message(&format!("handler panicked: {}", detail), sentry::Level::Fatal);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": INTERNAL_SERVER_ERROR })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn validation_error_carries_success_flag() {
        let response = AppError::Validation("bad input".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "bad input");
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = AppError::from(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn panic_payloads_become_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], INTERNAL_SERVER_ERROR);
    }
}
