use std::path::Path;
use std::time::Duration;

use crate::config::Credentials;
use crate::mail::{MessageBuilder, Transport};
use crate::models::{BatchResult, RecruiterRecord};

use super::pacer::Pacer;
use super::report::{BatchEvent, Reporter};

/// Sends one application per recruiter, strictly in list order.
///
/// Records are processed one at a time (build, send, report) with a fixed
/// pause between consecutive sends. A failed record never stops the batch.
pub struct BatchRunner<T, P, R> {
    credentials: Credentials,
    builder: MessageBuilder,
    transport: T,
    pacer: P,
    reporter: R,
}

impl<T, P, R> BatchRunner<T, P, R>
where
    T: Transport,
    P: Pacer,
    R: Reporter,
{
    pub fn new(credentials: Credentials, transport: T, pacer: P, reporter: R) -> Self {
        Self {
            builder: MessageBuilder::new(credentials.sender_address.clone()),
            credentials,
            transport,
            pacer,
            reporter,
        }
    }

    pub async fn run(
        &self,
        records: &[RecruiterRecord],
        resume_path: &Path,
        delay: Duration,
    ) -> BatchResult {
        let total = records.len();
        let mut result = BatchResult::start(total);

        tracing::info!(total, delay_secs = delay.as_secs_f64(), "Starting batch");
        self.reporter.report(&BatchEvent::Started {
            total,
            started_at: result.started_at,
        });

        for (i, record) in records.iter().enumerate() {
            let index = i + 1;

            self.reporter.report(&BatchEvent::Sending {
                index,
                total,
                name: record.name.clone(),
                company: record.company.clone(),
                recipient: record.email.clone(),
            });

            let outcome = self.builder.build(record, resume_path);
            if let Some(error) = outcome.attachment_error() {
                // Not a failure on its own: the message still goes out.
                self.reporter.report(&BatchEvent::AttachmentMissing {
                    index,
                    recipient: record.email.clone(),
                    detail: error.source.to_string(),
                });
            }
            let message = outcome.into_message();

            if self.transport.send(&message, &self.credentials).await {
                result.record_sent();
                self.reporter.report(&BatchEvent::Sent {
                    index,
                    recipient: record.email.clone(),
                });
            } else {
                result.record_failed();
                self.reporter.report(&BatchEvent::Failed {
                    index,
                    recipient: record.email.clone(),
                });
            }

            if index < total {
                self.reporter.report(&BatchEvent::Waiting { delay });
                self.pacer.pause(delay).await;
            }
        }

        result.finish();
        debug_assert!(result.is_complete());
        tracing::info!(
            total = result.total_count,
            sent = result.sent_count,
            failed = result.failed_count,
            "Batch completed"
        );
        self.reporter.report(&BatchEvent::Finished(result.clone()));

        result
    }
}
