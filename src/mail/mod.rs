//! Outbound mail delivery.
//!
//! Defines the `Mailer` seam between the notification/report logic and the
//! actual delivery mechanism. Production uses the SMTP implementation; when no
//! relay is configured the log mailer writes messages to the log instead, and
//! tests use a recording mailer.

pub mod smtp;

use thiserror::Error;

pub use smtp::SmtpMailer;

#[derive(Error, Debug)]
pub enum MailError {
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),
    #[error(transparent)]
    Build(#[from] lettre::error::Error),
}

/// Body of an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailBody {
    Plain(String),
    Html(String),
}

/// File attached to an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One outgoing email, fully assembled by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: MailBody,
    pub attachment: Option<MailAttachment>,
}

impl OutgoingEmail {
    pub fn plain(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: MailBody::Plain(body.into()),
            attachment: None,
        }
    }

    pub fn html(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: MailBody::Html(body.into()),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: MailAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// Mail-sending collaborator injected into services and jobs.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// Mailer that logs messages instead of sending them.
///
/// Installed when no SMTP relay is configured, so development setups work
/// without a mail server.
pub struct LogMailer;

#[async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        tracing::info!(
            "Mail delivery disabled; would send '{}' to {}",
            email.subject,
            email.to
        );
        Ok(())
    }
}

/// Mailer capturing every message for assertions in tests.
#[cfg(test)]
pub struct RecordingMailer {
    pub sent: tokio::sync::Mutex<Vec<OutgoingEmail>>,
    pub fail: bool,
}

#[cfg(test)]
impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Builds a mailer whose every send fails, for failure-path tests.
    pub fn failing() -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn sent_subjects(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .map(|email| email.subject.clone())
            .collect()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Address(
                "not-an-address".parse::<lettre::Address>().unwrap_err(),
            ));
        }
        self.sent.lock().await.push(email);
        Ok(())
    }
}
