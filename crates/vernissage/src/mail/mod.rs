//! Outbound email delivery.
//!
//! The [`Mailer`] trait abstracts over the transport so handlers can send
//! confirmations without caring whether SMTP is configured. When it is not,
//! [`NoopMailer`] logs the message and drops it, which keeps local
//! development working without a mail server.

mod smtp;

use async_trait::async_trait;

use vernissage_core::mail::EmailBody;

pub use smtp::{MailConfig, SmtpMailer};

/// Error raised when a message cannot be built or handed to the transport.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for mail operations.
pub type Result<T> = std::result::Result<T, MailError>;

/// Sends rendered emails to a single recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, body: &EmailBody) -> Result<()>;
}

/// Mailer that logs instead of sending. Used when SMTP is not configured.
#[derive(Debug, Default, Clone)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, to: &str, body: &EmailBody) -> Result<()> {
        tracing::info!(to, subject = %body.subject, "SMTP not configured, dropping email");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_mailer_accepts_anything() {
        let mailer = NoopMailer;
        let body = EmailBody {
            subject: "Your order".to_string(),
            text: "Thank you.".to_string(),
        };
        mailer.send("ann@example.com", &body).await.unwrap();
    }
}
