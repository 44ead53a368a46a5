use crate::config::Config;
use crate::email::{MailSender, SmtpMailer};
use crate::summarize::Summarizer;
use std::sync::Arc;

/// Shared application state for HTTP handlers
///
/// Built once at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
    pub mailer: Arc<dyn MailSender>,
    /// Directory served under `/app`
    pub static_dir: String,
    /// Maximum request body size in bytes
    pub body_limit: usize,
}

impl AppState {
    pub fn new(
        summarizer: Arc<Summarizer>,
        mailer: Arc<dyn MailSender>,
        static_dir: String,
        body_limit: usize,
    ) -> Self {
        Self {
            summarizer,
            mailer,
            static_dir,
            body_limit,
        }
    }

    /// State wired to the real completion API and SMTP relay
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(Summarizer::from_config(&config.llm)),
            Arc::new(SmtpMailer::new(config.smtp.clone())),
            config.server.static_dir.clone(),
            config.server.body_limit_bytes,
        )
    }
}
