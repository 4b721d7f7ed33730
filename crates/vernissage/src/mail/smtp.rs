//! SMTP mailer backed by lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use vernissage_core::mail::EmailBody;

use super::{MailError, Mailer, Result};

/// SMTP connection settings, read from the environment.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender address for all outgoing mail.
    pub from: String,
}

impl MailConfig {
    /// Loads SMTP settings from `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`,
    /// `SMTP_PASSWORD` and `MAIL_FROM`. Returns `None` when `SMTP_HOST` is
    /// unset, in which case the server falls back to the noop mailer.
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(587);
        let username = std::env::var("SMTP_USERNAME").ok();
        let password = std::env::var("SMTP_PASSWORD").ok();
        let from = std::env::var("MAIL_FROM")
            .unwrap_or_else(|_| "gallery@localhost".to_string());

        Some(Self {
            host,
            port,
            username,
            password,
            from,
        })
    }
}

/// Mailer that delivers over SMTP with STARTTLS.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Transport(format!("Invalid SMTP host: {e}")))?
            .port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, body: &EmailBody) -> Result<()> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| MailError::InvalidAddress(format!("{}: {e}", self.from)))?,
            )
            .to(to
                .parse()
                .map_err(|e| MailError::InvalidAddress(format!("{to}: {e}")))?)
            .subject(&body.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.text.clone())
            .map_err(|e| MailError::Transport(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::debug!(to, subject = %body.subject, "Email sent");
        Ok(())
    }
}
