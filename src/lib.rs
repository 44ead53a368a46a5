pub mod config;
pub mod email;
pub mod error;
pub mod http;
pub mod summarize;

pub use config::{Config, LlmConfig, ServerConfig, SmtpConfig};
pub use email::{escape_html, summary_html, MailSender, OutgoingEmail, SmtpMailer};
pub use error::{RelayError, RelayResult};
pub use http::{create_router, AppState};
pub use summarize::{ChatCompletionClient, CompletionProvider, CompletionRequest, Summarizer};
