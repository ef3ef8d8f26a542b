use chrono::{DateTime, Local};

use crate::checks::{CheckResult, CheckStatus};

/// Ordered check results for one source file, stamped at creation time.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub source: String,
    pub total_rows: usize,
    pub timestamp: DateTime<Local>,
    results: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn new(source: String, total_rows: usize) -> Self {
        Self {
            source,
            total_rows,
            timestamp: Local::now(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn is_passed(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.status != CheckStatus::Fail)
    }

    pub fn passed_count(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn failed_count(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(CheckStatus::Skipped)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Filename-safe timestamp tag for report artifacts.
    pub fn timestamp_tag(&self) -> String {
        self.timestamp.format("%Y%m%d%H%M%S").to_string()
    }
}
