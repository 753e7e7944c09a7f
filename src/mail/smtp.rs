//! SMTP mailer backed by lettre.

use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::mail::{MailBody, MailError, Mailer, OutgoingEmail};

/// Mailer delivering through an SMTP relay over STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds a pooled SMTP transport for the given relay.
    ///
    /// # Arguments
    /// - `host` - SMTP relay hostname
    /// - `port` - Relay port (conventionally 587 for STARTTLS)
    /// - `credentials` - Optional username/password pair
    /// - `from` - Sender mailbox, e.g. `Parkboard <noreply@example.com>`
    pub fn new(
        host: &str,
        port: u16,
        credentials: Option<(String, String)>,
        from: &str,
    ) -> Result<Self, MailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?.port(port);

        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from: from.parse()?,
        })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let builder = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .subject(email.subject);

        let body_part = match email.body {
            MailBody::Plain(text) => SinglePart::plain(text),
            MailBody::Html(html) => SinglePart::html(html),
        };

        let message = match email.attachment {
            Some(attachment) => {
                let content_type = ContentType::parse(&attachment.content_type)
                    .unwrap_or(ContentType::TEXT_PLAIN);
                let attachment_part = Attachment::new(attachment.filename)
                    .body(attachment.bytes, content_type);
                builder.multipart(
                    MultiPart::mixed()
                        .singlepart(body_part)
                        .singlepart(attachment_part),
                )?
            }
            None => builder.singlepart(body_part)?,
        };

        self.transport.send(message).await?;

        Ok(())
    }
}
