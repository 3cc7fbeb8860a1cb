//! HTTP error responses.
//!
//! Every failure leaves the service as `{"error": ..., "details"?: ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::infrastructure::ports::LlmError;
use crate::use_cases::{GenerateError, NarrativeError, TurnError};

const NOT_CONFIGURED_MESSAGE: &str = "API key not configured on server";
const UPSTREAM_MESSAGE: &str = "Error from Gemini API";
const RETRIEVAL_MESSAGE: &str = "Failed to retrieve game state from the database.";
const TURN_MESSAGE: &str = "Failed to process player action.";
const GENERATE_MESSAGE: &str = "Failed to generate text.";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    MethodNotAllowed,
    /// The model provider rejected the request; its status is passed through.
    Upstream {
        status: u16,
        details: serde_json::Value,
    },
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
                None,
            ),
            ApiError::Upstream { status, details } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                UPSTREAM_MESSAGE.to_string(),
                Some(details),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

/// Map a model failure, using `fallback` for errors without a dedicated response.
fn from_llm_error(e: LlmError, fallback: &str) -> ApiError {
    match e {
        LlmError::NotConfigured => {
            tracing::error!("GEMINI_API_KEY is not configured");
            ApiError::Internal(NOT_CONFIGURED_MESSAGE.to_string())
        }
        LlmError::Upstream { status, details } => {
            tracing::error!(status, details = %details, "Gemini API returned an error");
            ApiError::Upstream { status, details }
        }
        other => {
            tracing::error!(error = %other, "Model request failed");
            ApiError::Internal(fallback.to_string())
        }
    }
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::Validation(e) => {
                tracing::warn!(error = %e, "Rejected generate request");
                ApiError::BadRequest(e.message().to_string())
            }
            GenerateError::Generation(e) => from_llm_error(e, GENERATE_MESSAGE),
        }
    }
}

impl From<NarrativeError> for ApiError {
    fn from(e: NarrativeError) -> Self {
        tracing::error!(error = %e, "Failed to fetch narrative");
        ApiError::Internal(RETRIEVAL_MESSAGE.to_string())
    }
}

impl From<TurnError> for ApiError {
    fn from(e: TurnError) -> Self {
        match e {
            TurnError::Validation(e) => {
                tracing::warn!(error = %e, "Rejected player action");
                ApiError::BadRequest(e.message().to_string())
            }
            TurnError::StateNotInitialized(_) => {
                tracing::error!(error = %e, "Turn requested before game initialization");
                ApiError::Internal(e.to_string())
            }
            TurnError::Generation(e) => from_llm_error(e, TURN_MESSAGE),
            TurnError::EmptyNarrative | TurnError::Store(_) => {
                tracing::error!(error = %e, "Failed to process player action");
                ApiError::Internal(TURN_MESSAGE.to_string())
            }
        }
    }
}
