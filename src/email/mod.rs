//! Email relay
//!
//! Delivers a single summary email per request:
//! - `MailSender` is the seam handlers talk to
//! - `SmtpMailer` opens, verifies and uses a fresh SMTP transport per call
//! - `html` escapes summary text for HTML bodies

pub mod html;
mod smtp;

pub use html::{escape_html, summary_html};
pub use smtp::SmtpMailer;

use crate::error::RelayResult;

/// Subject used when the request leaves it blank
pub const DEFAULT_SUBJECT: &str = "Meeting Summary";

/// One message ready for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

impl OutgoingEmail {
    /// Normalize optional request fields
    ///
    /// A plain-text body without an HTML counterpart gets an escaped HTML
    /// alternative so clients always see the summary envelope.
    pub fn new(
        to: &str,
        subject: Option<&str>,
        html: Option<String>,
        text: Option<String>,
    ) -> Self {
        let subject = subject
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUBJECT)
            .to_string();

        let html = match (html, &text) {
            (Some(html), _) => Some(html),
            (None, Some(text)) => Some(summary_html(text)),
            (None, None) => None,
        };

        Self {
            to: to.trim().to_string(),
            subject,
            html,
            text,
        }
    }
}

/// Mail delivery backend
#[async_trait::async_trait]
pub trait MailSender: Send + Sync {
    /// Deliver `email` and return its message id
    async fn send(&self, email: &OutgoingEmail) -> RelayResult<String>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
