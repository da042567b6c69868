pub mod builder;
pub mod smtp;

use async_trait::async_trait;

use crate::config::Credentials;
use crate::models::OutboundMessage;

pub use builder::{build, AttachmentError, BuildOutcome, MessageBuilder};
pub use smtp::SmtpTransport;

/// Delivers one built message.
///
/// Implementations own their failure handling: every error is reported and
/// folded into `false`, so a batch never sees an error from this seam.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, message: &OutboundMessage, credentials: &Credentials) -> bool;
}
