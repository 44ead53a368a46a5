use super::extract::JsonBody;
use super::state::AppState;
use crate::email::OutgoingEmail;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    /// Transcript to summarize (required, non-blank)
    pub text: Option<String>,

    /// Extra instruction appended to the template
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SendEmailRequest {
    /// Recipient address (required)
    pub to: Option<String>,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub ok: bool,
    pub message_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(super) fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Liveness probe
pub async fn index() -> impl IntoResponse {
    Json(StatusResponse {
        ok: true,
        message: "AI Summarizer backend running.".to_string(),
    })
}

/// POST /summarize
/// Summarize a transcript through the completion provider
pub async fn summarize(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SummarizeRequest>,
) -> Response {
    let text = match req.text.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Missing \"text\" in request body".to_string(),
            )
        }
    };

    match state.summarizer.summarize(text, req.prompt.as_deref()).await {
        Ok(summary) => {
            info!("Summary generated ({} chars)", summary.chars().count());
            (StatusCode::OK, Json(SummarizeResponse { summary })).into_response()
        }
        Err(e) => {
            error!("Summarize error ({}): {}", e.kind(), e);
            error_response(e.status(), format!("Failed to summarize. {}", e))
        }
    }
}

/// POST /send-email
/// Deliver one email through the configured mailer
pub async fn send_email(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SendEmailRequest>,
) -> Response {
    let to = match req.to.as_deref() {
        Some(to) if !to.trim().is_empty() => to,
        _ => {
            return error_response(StatusCode::BAD_REQUEST, "Missing \"to\" email".to_string())
        }
    };

    let email = OutgoingEmail::new(to, req.subject.as_deref(), req.html, req.text);
    info!("Sending email to {} via {}", email.to, state.mailer.name());

    match state.mailer.send(&email).await {
        Ok(message_id) => (
            StatusCode::OK,
            Json(SendEmailResponse {
                ok: true,
                message_id,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Email error ({}): {}", e.kind(), e);
            error_response(e.status(), format!("Failed to send email. {}", e))
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
