//! Batch progress reporting.
//!
//! The runner emits a [`BatchEvent`] at each step; a [`Reporter`] decides what
//! to do with it. [`ConsoleReporter`] renders the human-readable progress and
//! summary, [`MemoryReporter`] keeps events around for inspection.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::models::BatchResult;

const RULE_WIDTH: usize = 60;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Started {
        total: usize,
        started_at: DateTime<Local>,
    },
    /// `index` is 1-based
    Sending {
        index: usize,
        total: usize,
        name: String,
        company: String,
        recipient: String,
    },
    AttachmentMissing {
        index: usize,
        recipient: String,
        detail: String,
    },
    Sent {
        index: usize,
        recipient: String,
    },
    Failed {
        index: usize,
        recipient: String,
    },
    Waiting {
        delay: Duration,
    },
    Finished(BatchResult),
}

pub trait Reporter: Send + Sync {
    fn report(&self, event: &BatchEvent);
}

/// Prints progress lines and the final summary to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, event: &BatchEvent) {
        print!("{}", render(event));
    }
}

/// Collects every event in order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<BatchEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BatchEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: &BatchEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Console text for one event, newline-terminated.
pub fn render(event: &BatchEvent) -> String {
    let rule = "=".repeat(RULE_WIDTH);

    match event {
        BatchEvent::Started { total, started_at } => format!(
            "\n{rule}\n📧 Starting to send {total} emails...\n🕐 Started at: {}\n{rule}\n\n",
            started_at.format(TIMESTAMP_FORMAT)
        ),
        BatchEvent::Sending {
            index,
            total,
            name,
            company,
            ..
        } => format!("📤 [{index}/{total}] Sending to {name} at {company}...\n"),
        BatchEvent::AttachmentMissing { detail, .. } => {
            format!("❌ Error attaching resume: {detail}\n")
        }
        BatchEvent::Sent { recipient, .. } => {
            format!("✅ Successfully sent to {recipient}\n\n")
        }
        BatchEvent::Failed { recipient, .. } => format!("❌ Failed to send to {recipient}\n\n"),
        BatchEvent::Waiting { delay } => format!(
            "⏳ Waiting {} seconds before next email...\n\n",
            delay.as_secs_f64()
        ),
        BatchEvent::Finished(result) => format!(
            "{rule}\n📊 EMAIL SENDING COMPLETED!\n{rule}\n\
             ✅ Total Sent: {}\n❌ Failed: {}\n📝 Total: {}\n\
             🕐 Started at: {}\n🕐 Finished at: {}\n{rule}\n\n",
            result.sent_count,
            result.failed_count,
            result.total_count,
            result.started_at.format(TIMESTAMP_FORMAT),
            result.finished_at.format(TIMESTAMP_FORMAT),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, h, m, s).unwrap()
    }

    #[test]
    fn test_render_progress_lines() {
        let sending = BatchEvent::Sending {
            index: 2,
            total: 3,
            name: "Priya".to_string(),
            company: "Acme".to_string(),
            recipient: "priya@acme.com".to_string(),
        };
        assert_eq!(render(&sending), "📤 [2/3] Sending to Priya at Acme...\n");

        let failed = BatchEvent::Failed {
            index: 2,
            recipient: "priya@acme.com".to_string(),
        };
        assert_eq!(render(&failed), "❌ Failed to send to priya@acme.com\n\n");

        let waiting = BatchEvent::Waiting {
            delay: Duration::from_secs(5),
        };
        assert_eq!(
            render(&waiting),
            "⏳ Waiting 5 seconds before next email...\n\n"
        );
    }

    #[test]
    fn test_render_summary() {
        let result = BatchResult {
            total_count: 3,
            sent_count: 2,
            failed_count: 1,
            started_at: at(9, 0, 0),
            finished_at: at(9, 0, 12),
        };

        let text = render(&BatchEvent::Finished(result));
        assert!(text.contains("✅ Total Sent: 2\n"));
        assert!(text.contains("❌ Failed: 1\n"));
        assert!(text.contains("📝 Total: 3\n"));
        assert!(text.contains("🕐 Started at: 2024-03-01 09:00:00\n"));
        assert!(text.contains("🕐 Finished at: 2024-03-01 09:00:12\n"));
    }

    #[test]
    fn test_memory_reporter_keeps_order() {
        let reporter = MemoryReporter::new();
        let first = BatchEvent::Sent {
            index: 1,
            recipient: "a@x.com".to_string(),
        };
        let second = BatchEvent::Failed {
            index: 2,
            recipient: "b@x.com".to_string(),
        };

        reporter.report(&first);
        reporter.report(&second);

        assert_eq!(reporter.events(), vec![first, second]);
    }
}
