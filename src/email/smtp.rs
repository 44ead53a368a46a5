use super::{MailSender, OutgoingEmail};
use crate::config::SmtpConfig;
use crate::error::{RelayError, RelayResult};
use lettre::message::{Mailbox, Mailboxes, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

/// SMTP delivery through a relay host
///
/// No connection is kept between calls; every `send` connects, verifies
/// (EHLO, TLS, AUTH) and delivers on a fresh transport.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the MIME message and the `Message-ID` assigned to it
    pub fn build_message(&self, email: &OutgoingEmail) -> RelayResult<(Message, String)> {
        let sender = self.config.sender().ok_or_else(|| {
            RelayError::Configuration("FROM_EMAIL or SMTP_USER must be configured".to_string())
        })?;
        let from: Mailbox = sender.parse().map_err(|e| {
            RelayError::Configuration(format!("Invalid sender address {}: {}", sender, e))
        })?;
        // Comma-separated lists are accepted, one `To` mailbox per entry
        let recipients: Mailboxes = email.to.parse().map_err(|e| {
            RelayError::Delivery(format!("Invalid recipient address {}: {}", email.to, e))
        })?;

        let message_id = format!("<{}@{}>", uuid::Uuid::new_v4(), from.email.domain());

        let mut builder = Message::builder()
            .from(from)
            .subject(email.subject.as_str())
            .message_id(Some(message_id.clone()));
        for recipient in recipients {
            builder = builder.to(recipient);
        }

        let message = match (&email.html, &email.text) {
            (Some(html), Some(text)) => builder.multipart(MultiPart::alternative_plain_html(
                text.clone(),
                html.clone(),
            )),
            (Some(html), None) => builder.singlepart(SinglePart::html(html.clone())),
            (None, Some(text)) => builder.singlepart(SinglePart::plain(text.clone())),
            (None, None) => builder.singlepart(SinglePart::plain(String::new())),
        }
        .map_err(|e| RelayError::Delivery(format!("Failed to build message: {}", e)))?;

        Ok((message, message_id))
    }

    fn transport(&self) -> RelayResult<AsyncSmtpTransport<Tokio1Executor>> {
        let host = self.config.host.as_str();

        let builder = if self.config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        } else {
            let tls = TlsParameters::new(host.to_string())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .tls(Tls::Opportunistic(tls))
        };

        let mut builder = builder.port(self.config.port);
        if let Some(username) = &self.config.username {
            let password = self.config.password.clone().unwrap_or_default();
            builder = builder.credentials(Credentials::new(username.clone(), password));
        }

        Ok(builder.build())
    }
}

#[async_trait::async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> RelayResult<String> {
        let (message, message_id) = self.build_message(email)?;
        let transport = self.transport()?;

        info!(
            "Verifying SMTP transport {}:{} (secure={})",
            self.config.host, self.config.port, self.config.secure
        );

        match transport.test_connection().await {
            Ok(true) => {}
            Ok(false) => {
                warn!("SMTP server {} closed the verification session", self.config.host);
                return Err(RelayError::Delivery(
                    "SMTP server rejected the connection".to_string(),
                ));
            }
            Err(e) => {
                return Err(RelayError::Delivery(format!(
                    "SMTP verification failed: {}",
                    e
                )));
            }
        }

        let response = transport
            .send(message)
            .await
            .map_err(|e| RelayError::Delivery(format!("SMTP send failed: {}", e)))?;

        info!(
            "Email {} accepted by {} ({})",
            message_id,
            self.config.host,
            response.code()
        );

        Ok(message_id)
    }

    fn name(&self) -> &str {
        "smtp"
    }
}
