use chrono::{DateTime, Local};

/// Outcome counters of one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub total_count: usize,
    pub sent_count: usize,
    pub failed_count: usize,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl BatchResult {
    /// Open a result for `total_count` records, stamped with the current time.
    pub fn start(total_count: usize) -> Self {
        let now = Local::now();
        Self {
            total_count,
            sent_count: 0,
            failed_count: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub fn record_sent(&mut self) {
        self.sent_count += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed_count += 1;
    }

    pub fn finish(&mut self) {
        self.finished_at = Local::now();
    }

    /// Records processed so far
    pub fn processed(&self) -> usize {
        self.sent_count + self.failed_count
    }

    pub fn is_complete(&self) -> bool {
        self.processed() == self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut result = BatchResult::start(3);
        assert_eq!(result.processed(), 0);
        assert!(!result.is_complete());

        result.record_sent();
        result.record_failed();
        result.record_sent();
        result.finish();

        assert_eq!(result.sent_count, 2);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.total_count, 3);
        assert!(result.is_complete());
        assert!(result.finished_at >= result.started_at);
    }
}
