use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment as MimeAttachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Credentials;
use crate::error::Result;
use crate::models::OutboundMessage;

use super::Transport;

const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// SMTP submission over STARTTLS (backed by lettre).
///
/// Every call opens its own connection, upgrades it to TLS before logging in,
/// sends one message and quits. Nothing is pooled between calls.
#[derive(Debug, Clone, Default)]
pub struct SmtpTransport;

impl SmtpTransport {
    pub fn new() -> Self {
        Self
    }

    async fn deliver(&self, message: &OutboundMessage, credentials: &Credentials) -> Result<()> {
        let email = to_mime(message)?;

        // starttls_relay refuses to continue if the server does not offer STARTTLS
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&credentials.server_host)?
            .port(credentials.server_port)
            .credentials(SmtpCredentials::new(
                credentials.sender_address.clone(),
                credentials.sender_secret.clone(),
            ))
            .build();

        mailer.send(email).await?;
        Ok(())
    }
}

#[async_trait]
impl Transport for SmtpTransport {
    async fn send(&self, message: &OutboundMessage, credentials: &Credentials) -> bool {
        match self.deliver(message, credentials).await {
            Ok(()) => {
                tracing::debug!(
                    recipient = %message.recipient,
                    server = %credentials.server_addr(),
                    "Email sent"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    recipient = %message.recipient,
                    error = %e,
                    "Failed to send email"
                );
                false
            }
        }
    }
}

/// Render an outbound message as a `multipart/mixed` MIME message.
pub fn to_mime(message: &OutboundMessage) -> Result<Message> {
    let from: Mailbox = message.sender.parse()?;
    let to: Mailbox = message.recipient.parse()?;

    let mut parts = MultiPart::mixed().singlepart(SinglePart::plain(message.body.clone()));

    if let Some(attachment) = &message.attachment {
        parts = parts.singlepart(
            MimeAttachment::new(attachment.filename.clone()).body(
                attachment.content.clone(),
                ContentType::parse(ATTACHMENT_CONTENT_TYPE)?,
            ),
        );
    }

    let email = Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.clone())
        .multipart(parts)?;

    Ok(email)
}
