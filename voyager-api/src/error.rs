use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConsentRequired,
    /// Unexpected failure during synthesis: generic message to the client,
    /// detail kept alongside for diagnostics.
    GenerationError { message: String, details: String },
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::NotFoundError(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            AppError::ConsentRequired => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "GDPR consent is required" })),
            )
                .into_response(),
            AppError::GenerationError { message, details } => {
                tracing::error!("Generation failed: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message, "details": details })),
                )
                    .into_response()
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
