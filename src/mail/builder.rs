use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Attachment, OutboundMessage, RecruiterRecord};

/// Reading the resume failed; the message was built without it.
#[derive(Debug, thiserror::Error)]
#[error("could not read attachment {}: {source}", .path.display())]
pub struct AttachmentError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Result of building one message.
///
/// A missing attachment does not stop the message from being built or sent;
/// callers can still tell the two cases apart.
#[derive(Debug)]
pub enum BuildOutcome {
    Complete(OutboundMessage),
    AttachmentMissing {
        message: OutboundMessage,
        error: AttachmentError,
    },
}

impl BuildOutcome {
    pub fn into_message(self) -> OutboundMessage {
        match self {
            BuildOutcome::Complete(message) => message,
            BuildOutcome::AttachmentMissing { message, .. } => message,
        }
    }

    pub fn attachment_error(&self) -> Option<&AttachmentError> {
        match self {
            BuildOutcome::Complete(_) => None,
            BuildOutcome::AttachmentMissing { error, .. } => Some(error),
        }
    }
}

/// Builds personalized application emails from a fixed sender
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    sender: String,
}

impl MessageBuilder {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    pub fn build(&self, record: &RecruiterRecord, resume_path: &Path) -> BuildOutcome {
        let message = OutboundMessage {
            sender: self.sender.clone(),
            recipient: record.email.clone(),
            subject: subject_for(&record.position),
            body: body_for(record),
            attachment: None,
        };

        match read_attachment(resume_path) {
            Ok(attachment) => BuildOutcome::Complete(OutboundMessage {
                attachment: Some(attachment),
                ..message
            }),
            Err(error) => {
                tracing::warn!(
                    recipient = %record.email,
                    path = %resume_path.display(),
                    error = %error.source,
                    "Error attaching resume, sending without it"
                );
                BuildOutcome::AttachmentMissing { message, error }
            }
        }
    }
}

/// Build a single message without keeping a builder around.
pub fn build(record: &RecruiterRecord, resume_path: &Path, sender: &str) -> BuildOutcome {
    MessageBuilder::new(sender).build(record, resume_path)
}

pub fn subject_for(position: &str) -> String {
    format!("Application for {} Position", position)
}

// The closing lines are literal placeholders and are sent as-is.
fn body_for(record: &RecruiterRecord) -> String {
    format!(
        "Dear {name},\n\
         \n\
         I hope this email finds you well. I am writing to express my strong interest in the {position} position at {company}.\n\
         \n\
         With my background and skills, I believe I would be a valuable addition to your team. I have attached my resume for your review, which provides detailed information about my experience and qualifications.\n\
         \n\
         I would welcome the opportunity to discuss how my skills and experience align with your needs. Thank you for considering my application.\n\
         \n\
         Best regards,\n\
         [Your Full Name]\n\
         [Your Phone Number]\n\
         [Your Email]\n\
         [Your LinkedIn Profile URL]",
        name = record.name,
        position = record.position,
        company = record.company,
    )
}

fn read_attachment(path: &Path) -> Result<Attachment, AttachmentError> {
    let content = fs::read(path).map_err(|source| AttachmentError {
        path: path.to_path_buf(),
        source,
    })?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    Ok(Attachment { filename, content })
}
