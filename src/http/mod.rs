//! HTTP API server for the browser client
//!
//! This module exposes both relays over JSON:
//! - GET / - Liveness probe
//! - GET /health - Health check
//! - POST /summarize - Summarize a transcript
//! - POST /send-email - Email a summary
//! - GET /app - Static browser client

mod extract;
mod handlers;
mod routes;
mod state;

pub use extract::JsonBody;
pub use handlers::{
    ErrorResponse, SendEmailRequest, SendEmailResponse, StatusResponse, SummarizeRequest,
    SummarizeResponse,
};
pub use routes::create_router;
pub use state::AppState;
